use serde::{Deserialize, Serialize};

use super::models::{PlayerProfile, PlayerStatsAggregate};

/// Path segments shared by every player route
#[derive(Debug, Deserialize)]
pub struct PlayerPath {
    pub platform: String,
    pub player_name: String,
}

/// Player profile with the caller's favorite flag merged in
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfileResponse {
    #[serde(flatten)]
    pub profile: PlayerProfile,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    #[serde(flatten)]
    pub stats: PlayerStatsAggregate,
    pub is_favorite: bool,
}
