use crate::models::{AnimalRecord, NewAnimalRequest};
use chrono::Utc;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by feed lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Animal not found: {0}")]
    NotFound(u64),
}

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate animal id in catalog: {0}")]
    DuplicateId(u64),
}

/// What `FeedStore::get_feed` had to do before serving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replenishment {
    /// Live feed was non-empty and served as is
    None,
    /// Live feed rebuilt from animals not yet seen
    Unseen,
    /// Every animal had been seen: live feed and seen set reset
    HardReset,
}

/// Catalog of animals plus the live feed served for swiping
///
/// # State
/// - `catalog`: every animal ever created, in creation order
/// - `live`: ids currently eligible for display, a subset of the catalog
/// - `seen`: ids swiped since the last hard reset
///
/// The live feed drains as animals are swiped. Once empty it is refilled
/// from the unseen part of the catalog, and only when nothing is left
/// unseen does a hard reset put the whole catalog back.
#[derive(Debug, Clone)]
pub struct FeedStore {
    catalog: Vec<AnimalRecord>,
    live: Vec<u64>,
    seen: HashSet<u64>,
    next_id: u64,
}

impl FeedStore {
    /// Build a store whose live feed is the full catalog, in catalog order
    pub fn new(catalog: Vec<AnimalRecord>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(catalog.len());
        for animal in &catalog {
            if !ids.insert(animal.id) {
                return Err(CatalogError::DuplicateId(animal.id));
            }
        }

        let live = catalog.iter().map(|a| a.id).collect();
        let next_id = catalog.iter().map(|a| a.id).max().unwrap_or(0) + 1;

        Ok(Self {
            catalog,
            live,
            seen: HashSet::new(),
            next_id,
        })
    }

    /// Serve the live feed, replenishing it first if it has drained
    pub fn get_feed(&mut self) -> (Vec<AnimalRecord>, Replenishment) {
        let replenishment = self.replenish();
        (self.live_animals(), replenishment)
    }

    fn replenish(&mut self) -> Replenishment {
        if !self.live.is_empty() || self.catalog.is_empty() {
            return Replenishment::None;
        }

        self.live = self
            .catalog
            .iter()
            .map(|a| a.id)
            .filter(|id| !self.seen.contains(id))
            .collect();

        if !self.live.is_empty() {
            return Replenishment::Unseen;
        }

        self.live = self.catalog.iter().map(|a| a.id).collect();
        self.seen.clear();
        Replenishment::HardReset
    }

    fn live_animals(&self) -> Vec<AnimalRecord> {
        self.live
            .iter()
            .filter_map(|id| self.find_in_catalog(*id))
            .cloned()
            .collect()
    }

    fn find_in_catalog(&self, id: u64) -> Option<&AnimalRecord> {
        self.catalog.iter().find(|a| a.id == id)
    }

    /// Look up an animal that is currently live
    ///
    /// Swiped animals and ids never seeded are both `NotFound`.
    pub fn get_by_id(&self, id: u64) -> Result<AnimalRecord, FeedError> {
        if !self.live.contains(&id) {
            return Err(FeedError::NotFound(id));
        }

        self.find_in_catalog(id)
            .cloned()
            .ok_or(FeedError::NotFound(id))
    }

    /// Append a new animal to the catalog
    ///
    /// The animal is not added to the live feed; it becomes servable on the
    /// next replenishment.
    pub fn add_animal(&mut self, req: NewAnimalRequest) -> AnimalRecord {
        let now = Utc::now();
        let animal = AnimalRecord {
            id: self.next_id,
            name: req.name,
            animal_type: req.animal_type.unwrap_or_default(),
            breed: req.breed,
            age: req.age,
            size: req.size,
            gender: req.gender,
            color: req.color,
            location: req.location,
            description: req.description,
            photos: Vec::new(),
            status: req.status.unwrap_or_default(),
            vaccinated: req.vaccinated.unwrap_or(false),
            neutered: req.neutered.unwrap_or(false),
            good_with_kids: req.good_with_kids.unwrap_or(false),
            good_with_pets: req.good_with_pets.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        self.next_id += 1;
        self.catalog.push(animal.clone());
        animal
    }

    /// Take a swiped animal out of the live feed
    ///
    /// Returns `false` when the animal was not live, in which case nothing
    /// changes.
    pub fn mark_swiped(&mut self, animal_id: u64) -> bool {
        match self.live.iter().position(|id| *id == animal_id) {
            Some(index) => {
                self.live.remove(index);
                self.seen.insert(animal_id);
                true
            }
            None => false,
        }
    }

    pub fn live_ids(&self) -> &[u64] {
        &self.live
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_seen(&self, animal_id: u64) -> bool {
        self.seen.contains(&animal_id)
    }
}
