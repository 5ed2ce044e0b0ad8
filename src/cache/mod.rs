pub mod models;
pub mod repository;

pub use models::CacheEntry;
pub use repository::{CacheRepository, InMemoryCacheRepository};
