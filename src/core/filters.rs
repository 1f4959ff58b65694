use crate::models::{AnimalRecord, FeedQuery};

/// Check if an animal passes the optional feed filters
///
/// Unset filters always pass. `location` is a case-insensitive substring
/// match against the animal's free-text location.
#[inline]
pub fn matches_feed_query(animal: &AnimalRecord, query: &FeedQuery) -> bool {
    if let Some(animal_type) = query.animal_type {
        if animal.animal_type != animal_type {
            return false;
        }
    }

    if let Some(size) = query.size {
        if animal.size != Some(size) {
            return false;
        }
    }

    if let Some(status) = query.status {
        if animal.status != status {
            return false;
        }
    }

    if let Some(needle) = query.location.as_deref().filter(|l| !l.is_empty()) {
        let needle = needle.to_lowercase();
        match &animal.location {
            Some(location) if location.to_lowercase().contains(&needle) => {}
            _ => return false,
        }
    }

    true
}

/// Apply feed filters to a served feed, preserving order
pub fn filter_feed(animals: Vec<AnimalRecord>, query: &FeedQuery) -> Vec<AnimalRecord> {
    animals
        .into_iter()
        .filter(|animal| matches_feed_query(animal, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::default_catalog;
    use crate::models::{AnimalSize, AnimalStatus, AnimalType};

    #[test]
    fn test_empty_query_passes_everything() {
        let catalog = default_catalog();
        assert_eq!(filter_feed(catalog.clone(), &FeedQuery::default()), catalog);
    }

    #[test]
    fn test_filter_by_type_and_size() {
        let query = FeedQuery {
            animal_type: Some(AnimalType::Dog),
            size: Some(AnimalSize::Large),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_feed(default_catalog(), &query).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_by_location_is_case_insensitive() {
        let query = FeedQuery {
            location: Some("tashkent".to_string()),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_feed(default_catalog(), &query).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 4, 6]);
    }

    #[test]
    fn test_filter_by_status_and_missing_location() {
        let mut animal = default_catalog().remove(0);
        animal.location = None;

        let by_location = FeedQuery {
            location: Some("bukhara".to_string()),
            ..Default::default()
        };
        assert!(!matches_feed_query(&animal, &by_location));

        let adopted = FeedQuery {
            status: Some(AnimalStatus::Adopted),
            ..Default::default()
        };
        assert!(!matches_feed_query(&animal, &adopted));
    }
}
