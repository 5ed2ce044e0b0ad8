// Public API - what other modules can use
pub use client::{PubgApiClient, StatsProvider};
pub use errors::ProviderError;
pub use models::*;

// Internal modules
mod client;
mod errors;
pub mod lenient;
pub mod models;
