use crate::models::{SwipeDirection, SwipeRecord};
use chrono::Utc;

/// Append-only log of swipe interactions
#[derive(Debug, Clone)]
pub struct SwipeRecorder {
    log: Vec<SwipeRecord>,
    next_id: u64,
}

impl SwipeRecorder {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a swipe and return the stored record
    ///
    /// Unrecognized directions are recorded with `is_match == false`.
    pub fn record(&mut self, user_id: u64, animal_id: u64, direction: SwipeDirection) -> SwipeRecord {
        let swipe = SwipeRecord {
            id: self.next_id,
            user_id,
            animal_id,
            is_match: direction.is_match(),
            direction,
            created_at: Utc::now(),
        };

        self.next_id += 1;
        self.log.push(swipe.clone());
        swipe
    }

    /// Every swipe classified as a match, in insertion order
    pub fn matches(&self) -> Vec<SwipeRecord> {
        self.log.iter().filter(|s| s.is_match).cloned().collect()
    }

    /// Swipes newest first, skipping `skip` and returning at most `limit`
    pub fn history(&self, skip: usize, limit: usize) -> Vec<SwipeRecord> {
        self.log.iter().rev().skip(skip).take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

impl Default for SwipeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut recorder = SwipeRecorder::new();
        assert!(recorder.is_empty());

        let first = recorder.record(1, 5, SwipeDirection::Left);
        let second = recorder.record(1, 5, SwipeDirection::Left);
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_matches_in_insertion_order_without_dedup() {
        let mut recorder = SwipeRecorder::new();
        recorder.record(1, 1, SwipeDirection::Right);
        recorder.record(1, 2, SwipeDirection::Left);
        recorder.record(1, 3, SwipeDirection::SuperLike);
        recorder.record(1, 1, SwipeDirection::Right);
        recorder.record(1, 4, SwipeDirection::from("up"));

        let animal_ids: Vec<u64> = recorder.matches().iter().map(|s| s.animal_id).collect();
        assert_eq!(animal_ids, vec![1, 3, 1]);
    }

    #[test]
    fn test_unrecognized_direction_is_not_a_match() {
        let mut recorder = SwipeRecorder::new();
        let swipe = recorder.record(1, 2, SwipeDirection::from("maybe"));
        assert!(!swipe.is_match);
        assert_eq!(swipe.direction.as_str(), "maybe");
        assert!(recorder.matches().is_empty());
    }

    #[test]
    fn test_history_newest_first_with_paging() {
        let mut recorder = SwipeRecorder::new();
        for animal_id in 1..=5 {
            recorder.record(1, animal_id, SwipeDirection::Left);
        }

        let ids: Vec<u64> = recorder.history(0, 100).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);

        let ids: Vec<u64> = recorder.history(1, 2).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4, 3]);

        assert!(recorder.history(10, 2).is_empty());
    }
}
