// Public API - what other modules can use
pub use handlers::{get_match, PlatformQuery};
pub use models::{NormalizedMatch, NormalizedParticipant, PlayerMatchSummary};
pub use normalizer::normalize_match;
pub use service::MatchService;

// Internal modules
mod handlers;
pub mod models;
mod normalizer;
mod service;
