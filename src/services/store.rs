use crate::config::CatalogSettings;
use crate::core::{default_catalog, load_catalog, CatalogError, FeedError, FeedStore, Replenishment, SeedError, SwipeRecorder};
use crate::models::{AnimalRecord, NewAnimalRequest, SwipeDirection, SwipeRecord};
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors that can occur while building the store at startup
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

struct StoreState {
    feed: FeedStore,
    swipes: SwipeRecorder,
}

/// Shared adoption store
///
/// Holds the catalog, live feed, seen set and swipe log behind a single
/// lock. Every operation takes the lock for its whole read-modify-write so
/// a swipe and the feed mutation it causes are observed together.
pub struct AdoptionStore {
    state: Mutex<StoreState>,
}

impl AdoptionStore {
    pub fn new(feed: FeedStore) -> Self {
        Self {
            state: Mutex::new(StoreState {
                feed,
                swipes: SwipeRecorder::new(),
            }),
        }
    }

    /// Create a store from settings, using the built-in seed unless a seed
    /// file is configured
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, StoreError> {
        let catalog = match &settings.seed_path {
            Some(path) => {
                tracing::info!("Loading seed catalog from {}", path);
                load_catalog(path)?
            }
            None => default_catalog(),
        };

        let feed = FeedStore::new(catalog)?;
        tracing::info!("Feed store ready with {} animals", feed.catalog_len());

        Ok(Self::new(feed))
    }

    /// Current live feed, replenished if it had drained
    pub async fn get_feed(&self) -> Vec<AnimalRecord> {
        let mut state = self.state.lock().await;
        let (feed, replenishment) = state.feed.get_feed();

        match replenishment {
            Replenishment::None => {}
            Replenishment::Unseen => {
                tracing::info!("Live feed drained, refilled with {} unseen animals", feed.len());
            }
            Replenishment::HardReset => {
                tracing::info!("Every animal seen, hard reset of live feed ({} animals)", feed.len());
            }
        }

        feed
    }

    pub async fn get_by_id(&self, id: u64) -> Result<AnimalRecord, FeedError> {
        self.state.lock().await.feed.get_by_id(id)
    }

    pub async fn add_animal(&self, req: NewAnimalRequest) -> AnimalRecord {
        let animal = self.state.lock().await.feed.add_animal(req);
        tracing::info!("Added animal {} to catalog", animal.id);
        animal
    }

    /// Record a swipe and take the animal out of the live feed if present
    pub async fn record_swipe(
        &self,
        user_id: u64,
        animal_id: u64,
        direction: SwipeDirection,
    ) -> SwipeRecord {
        let mut state = self.state.lock().await;
        let swipe = state.swipes.record(user_id, animal_id, direction);
        let removed = state.feed.mark_swiped(animal_id);
        drop(state);

        tracing::debug!(
            "Recorded swipe {}: user {} -> animal {} ({}, match: {}, removed from feed: {})",
            swipe.id,
            user_id,
            animal_id,
            swipe.direction,
            swipe.is_match,
            removed
        );

        swipe
    }

    pub async fn list_matches(&self) -> Vec<SwipeRecord> {
        self.state.lock().await.swipes.matches()
    }

    pub async fn history(&self, skip: usize, limit: usize) -> Vec<SwipeRecord> {
        self.state.lock().await.swipes.history(skip, limit)
    }

    /// Ids currently in the live feed, without replenishing
    pub async fn live_ids(&self) -> Vec<u64> {
        self.state.lock().await.feed.live_ids().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store() -> AdoptionStore {
        AdoptionStore::new(FeedStore::new(default_catalog()).unwrap())
    }

    #[tokio::test]
    async fn test_from_settings_uses_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 3, "name": "Kesha", "type": "bird"}}]"#).unwrap();

        let settings = CatalogSettings {
            seed_path: Some(file.path().display().to_string()),
        };
        let store = AdoptionStore::from_settings(&settings).unwrap();
        assert_eq!(store.live_ids().await, vec![3]);

        let default = AdoptionStore::from_settings(&CatalogSettings::default()).unwrap();
        assert_eq!(default.live_ids().await.len(), 6);
    }

    #[test]
    fn test_from_settings_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1}}, {{"id": 1}}]"#).unwrap();

        let settings = CatalogSettings {
            seed_path: Some(file.path().display().to_string()),
        };
        assert!(matches!(
            AdoptionStore::from_settings(&settings),
            Err(StoreError::Catalog(CatalogError::DuplicateId(1)))
        ));
    }

    #[tokio::test]
    async fn test_swipe_removes_from_live_feed() {
        let store = store();
        let swipe = store.record_swipe(1, 2, SwipeDirection::Right).await;

        assert_eq!(swipe.id, 1);
        assert!(swipe.is_match);
        assert_eq!(store.live_ids().await, vec![1, 3, 4, 5, 6]);
        assert_eq!(store.get_by_id(2).await, Err(FeedError::NotFound(2)));
    }

    #[tokio::test]
    async fn test_swipe_on_unknown_animal_still_recorded() {
        let store = store();
        let swipe = store.record_swipe(1, 42, SwipeDirection::Right).await;

        assert_eq!(swipe.animal_id, 42);
        assert_eq!(store.list_matches().await.len(), 1);
        assert_eq!(store.live_ids().await.len(), 6);
    }

    #[tokio::test]
    async fn test_concurrent_swipes_keep_feed_consistent() {
        let store = std::sync::Arc::new(store());

        let handles: Vec<_> = (1..=6u64)
            .map(|animal_id| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.record_swipe(1, animal_id, SwipeDirection::SuperLike).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(store.live_ids().await.is_empty());
        assert_eq!(store.list_matches().await.len(), 6);
        assert_eq!(store.get_feed().await.len(), 6);
    }
}
