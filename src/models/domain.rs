use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Species tag of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Dog,
    Cat,
    Bird,
    Rabbit,
    #[default]
    Other,
}

/// Lifecycle status of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimalStatus {
    Lost,
    #[default]
    Found,
    InShelter,
    Adopted,
    NeedsHelp,
    Available,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalSize {
    Small,
    Medium,
    Large,
}

/// Photo reference attached to an animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalPhoto {
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// An animal in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub animal_type: AnimalType,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub size: Option<AnimalSize>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<AnimalPhoto>,
    #[serde(default)]
    pub status: AnimalStatus,
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(default)]
    pub neutered: bool,
    #[serde(default)]
    pub good_with_kids: bool,
    #[serde(default)]
    pub good_with_pets: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Direction of a swipe
///
/// Tags outside `left`, `right` and `super_like` are kept verbatim so the
/// swipe log echoes exactly what the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SwipeDirection {
    Left,
    Right,
    SuperLike,
    Unrecognized(String),
}

impl SwipeDirection {
    /// Right swipes and super likes count as matches
    pub fn is_match(&self) -> bool {
        matches!(self, SwipeDirection::Right | SwipeDirection::SuperLike)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::SuperLike => "super_like",
            SwipeDirection::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for SwipeDirection {
    fn from(value: String) -> Self {
        match value.as_str() {
            "left" => SwipeDirection::Left,
            "right" => SwipeDirection::Right,
            "super_like" => SwipeDirection::SuperLike,
            _ => SwipeDirection::Unrecognized(value),
        }
    }
}

impl From<&str> for SwipeDirection {
    fn from(value: &str) -> Self {
        SwipeDirection::from(value.to_string())
    }
}

impl From<SwipeDirection> for String {
    fn from(value: SwipeDirection) -> Self {
        match value {
            SwipeDirection::Unrecognized(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded swipe interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeRecord {
    pub id: u64,
    pub user_id: u64,
    pub animal_id: u64,
    pub direction: SwipeDirection,
    pub is_match: bool,
    pub created_at: DateTime<Utc>,
}

/// Fixed demo account returned by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubUser {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub points: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_match_classification() {
        assert!(SwipeDirection::from("right").is_match());
        assert!(SwipeDirection::from("super_like").is_match());
        assert!(!SwipeDirection::from("left").is_match());
        assert!(!SwipeDirection::from("sideways").is_match());
        // Tags are case-sensitive
        assert!(!SwipeDirection::from("RIGHT").is_match());
    }

    #[test]
    fn test_unrecognized_direction_serializes_verbatim() {
        let direction: SwipeDirection = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(direction, SwipeDirection::Unrecognized("up".to_string()));
        assert_eq!(serde_json::to_string(&direction).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&SwipeDirection::SuperLike).unwrap(),
            "\"super_like\""
        );
    }

    #[test]
    fn test_animal_record_wire_names() {
        let json = serde_json::json!({
            "id": 9,
            "name": "Tom",
            "type": "cat",
            "status": "in_shelter",
            "size": "small",
        });
        let animal: AnimalRecord = serde_json::from_value(json).unwrap();
        assert_eq!(animal.animal_type, AnimalType::Cat);
        assert_eq!(animal.status, AnimalStatus::InShelter);
        assert!(animal.photos.is_empty());

        let out = serde_json::to_value(&animal).unwrap();
        assert_eq!(out["type"], "cat");
        assert_eq!(out["status"], "in_shelter");
    }
}
