//! Pet Help API - animal feed and swipe service for the Pet Help adoption platform
//!
//! Serves a cyclically replenished feed of adoptable animals and records
//! swipe interactions against it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FeedStore, SwipeRecorder, Replenishment};
pub use error::ApiError;
pub use models::{AnimalRecord, SwipeDirection, SwipeRecord, NewAnimalRequest};
pub use services::AdoptionStore;
