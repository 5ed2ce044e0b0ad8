pub mod fixtures;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use fixtures::MatchBuilder;
#[allow(unused_imports)]
pub use mocks::MockStatsProvider;
pub use setup::TestApp;
