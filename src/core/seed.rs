use crate::models::{AnimalPhoto, AnimalRecord, AnimalSize, AnimalStatus, AnimalType};
use chrono::Utc;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a seed catalog from disk
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

struct SeedAnimal {
    name: &'static str,
    animal_type: AnimalType,
    breed: &'static str,
    age: u8,
    size: AnimalSize,
    location: &'static str,
    description: &'static str,
    photo: &'static str,
    good_with_kids: bool,
    good_with_pets: bool,
}

const SEED: [SeedAnimal; 6] = [
    SeedAnimal {
        name: "Barsik",
        animal_type: AnimalType::Cat,
        breed: "Siamese",
        age: 2,
        size: AnimalSize::Medium,
        location: "Tashkent, Yakkasaray district",
        description: "Affectionate cat looking for a home. Litter trained and vaccinated.",
        photo: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400&h=400&fit=crop",
        good_with_kids: true,
        good_with_pets: true,
    },
    SeedAnimal {
        name: "Rex",
        animal_type: AnimalType::Dog,
        breed: "German Shepherd",
        age: 3,
        size: AnimalSize::Large,
        location: "Samarkand, city center",
        description: "Loyal friend and guard. Knows commands, well socialized.",
        photo: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&h=400&fit=crop",
        good_with_kids: true,
        good_with_pets: false,
    },
    SeedAnimal {
        name: "Murka",
        animal_type: AnimalType::Cat,
        breed: "Persian",
        age: 1,
        size: AnimalSize::Small,
        location: "Bukhara, Gijduvan",
        description: "Fluffy beauty, very gentle and playful.",
        photo: "https://images.unsplash.com/photo-1573865526739-10659fec78a5?w=400&h=400&fit=crop",
        good_with_kids: true,
        good_with_pets: true,
    },
    SeedAnimal {
        name: "Sharik",
        animal_type: AnimalType::Dog,
        breed: "Labrador",
        age: 5,
        size: AnimalSize::Large,
        location: "Tashkent, Mirabad",
        description: "Kind and calm dog, an ideal family companion.",
        photo: "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&h=400&fit=crop",
        good_with_kids: true,
        good_with_pets: true,
    },
    SeedAnimal {
        name: "Vasilisa",
        animal_type: AnimalType::Cat,
        breed: "British Shorthair",
        age: 4,
        size: AnimalSize::Medium,
        location: "Namangan, Afrosiab",
        description: "Calm cat with aristocratic manners.",
        photo: "https://images.unsplash.com/photo-1533738363-b7f9aef128ce?w=400&h=400&fit=crop",
        good_with_kids: false,
        good_with_pets: false,
    },
    SeedAnimal {
        name: "Bobik",
        animal_type: AnimalType::Dog,
        breed: "Alabai",
        age: 2,
        size: AnimalSize::Large,
        location: "Tashkent, Chilanzar",
        description: "Smart and faithful friend. A great guard for the house.",
        photo: "https://images.unsplash.com/photo-1517849845537-4d257902454a?w=400&h=400&fit=crop",
        good_with_kids: true,
        good_with_pets: true,
    },
];

/// Built-in seed catalog, ids 1 through 6
pub fn default_catalog() -> Vec<AnimalRecord> {
    let now = Utc::now();

    SEED.iter()
        .enumerate()
        .map(|(i, seed)| AnimalRecord {
            id: i as u64 + 1,
            name: Some(seed.name.to_string()),
            animal_type: seed.animal_type,
            breed: Some(seed.breed.to_string()),
            age: Some(seed.age),
            size: Some(seed.size),
            gender: None,
            color: None,
            location: Some(seed.location.to_string()),
            description: Some(seed.description.to_string()),
            photos: vec![AnimalPhoto {
                url: seed.photo.to_string(),
                is_primary: true,
            }],
            status: AnimalStatus::Available,
            vaccinated: false,
            neutered: false,
            good_with_kids: seed.good_with_kids,
            good_with_pets: seed.good_with_pets,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

/// Load a seed catalog from a JSON file holding an array of animals
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<AnimalRecord>, SeedError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let animals: Vec<AnimalRecord> = serde_json::from_str(&raw)?;

    tracing::debug!(
        "Loaded {} seed animals from {}",
        animals.len(),
        path.as_ref().display()
    );

    Ok(animals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_ids_are_sequential() {
        let catalog = default_catalog();
        let ids: Vec<u64> = catalog.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(catalog.iter().all(|a| a.photos.len() == 1 && a.photos[0].is_primary));
        assert!(catalog.iter().all(|a| a.status == AnimalStatus::Available));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 10, "name": "Kesha", "type": "bird"}}, {{"id": 12, "type": "rabbit", "size": "small"}}]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].animal_type, AnimalType::Bird);
        assert_eq!(catalog[1].size, Some(AnimalSize::Small));
    }

    #[test]
    fn test_load_catalog_errors() {
        assert!(matches!(
            load_catalog("/nonexistent/seed.json"),
            Err(SeedError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(load_catalog(file.path()), Err(SeedError::Parse(_))));
    }
}
