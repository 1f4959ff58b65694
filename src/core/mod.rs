// Core feed/swipe exports
pub mod feed;
pub mod filters;
pub mod recorder;
pub mod seed;

pub use feed::{CatalogError, FeedError, FeedStore, Replenishment};
pub use filters::{filter_feed, matches_feed_query};
pub use recorder::SwipeRecorder;
pub use seed::{default_catalog, load_catalog, SeedError};
