// Service exports
pub mod auth;
pub mod store;

pub use auth::{issue_token, stub_user, STUB_USER_ID};
pub use store::{AdoptionStore, StoreError};
