// Library crate for the player statistics server
// This file exposes the public API for integration tests

pub mod cache;
pub mod config;
pub mod matches;
pub mod players;
pub mod provider;
pub mod routes;
pub mod search;
pub mod shared;
pub mod telemetry;

// Re-export commonly used types for easier access in tests
pub use cache::{CacheRepository, InMemoryCacheRepository};
pub use config::AppConfig;
pub use matches::{normalize_match, NormalizedMatch, NormalizedParticipant};
pub use players::{PlayerProfile, PlayerStatsAggregate};
pub use provider::{Platform, PubgApiClient, StatsProvider};
pub use routes::build_router;
pub use search::{InMemorySearchRepository, SearchRepository};
pub use shared::{AppError, AppState};
pub use telemetry::{reconstruct, TelemetryProjection, TelemetryResponse};
