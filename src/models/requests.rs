use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AnimalSize, AnimalStatus, AnimalType, SwipeDirection};

/// Request to create an animal
///
/// Every field is optional. Fields outside this list are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewAnimalRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub animal_type: Option<AnimalType>,
    #[validate(length(max = 100))]
    pub breed: Option<String>,
    #[validate(range(max = 40))]
    pub age: Option<u8>,
    pub size: Option<AnimalSize>,
    #[validate(length(max = 20))]
    pub gender: Option<String>,
    #[validate(length(max = 50))]
    pub color: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub status: Option<AnimalStatus>,
    pub vaccinated: Option<bool>,
    pub neutered: Option<bool>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub good_with_kids: Option<bool>,
    pub good_with_pets: Option<bool>,
}

/// Request to record a swipe
///
/// POST /api/v1/swipes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRequest {
    pub animal_id: u64,
    pub direction: SwipeDirection,
}

/// Optional filters applied to the served feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedQuery {
    #[serde(rename = "type", alias = "animal_type")]
    pub animal_type: Option<AnimalType>,
    pub size: Option<AnimalSize>,
    pub status: Option<AnimalStatus>,
    pub location: Option<String>,
}

/// Paging for the swipe history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize {
    100
}
