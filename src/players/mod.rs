// Public API - what other modules can use
pub use aggregator::{aggregate, game_mode_label};
pub use handlers::{
    get_player, get_player_matches, get_player_stats, get_survival_mastery, get_weapon_mastery,
};
pub use map_breakdown::map_display_name;
pub use models::{MapSummary, MatchSample, PlayerProfile, PlayerStatsAggregate, WeaponSummary};
pub use service::PlayerService;
pub use types::{PlayerProfileResponse, PlayerStatsResponse};

// Internal modules
mod aggregator;
mod handlers;
mod map_breakdown;
mod mastery;
pub mod models;
mod service;
mod types;
