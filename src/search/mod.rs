// Public API - what other modules can use
pub use handlers::{recent_searches, record_search, set_favorite};
pub use models::{SearchEntry, UserPreference};
pub use repository::{InMemorySearchRepository, SearchRepository};
pub use service::SearchService;
pub use types::{FavoriteRequest, FavoriteResponse, SearchRequest, SuccessResponse};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod service;
pub mod types;
