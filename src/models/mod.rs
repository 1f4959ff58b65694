// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnimalPhoto, AnimalRecord, AnimalSize, AnimalStatus, AnimalType, StubUser, SwipeDirection, SwipeRecord};
pub use requests::{FeedQuery, HistoryQuery, NewAnimalRequest, SwipeRequest};
pub use responses::{ErrorResponse, HealthResponse, IndexResponse, TokenResponse};
