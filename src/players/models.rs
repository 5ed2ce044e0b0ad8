use serde::{Deserialize, Serialize};

/// Cached per-player aggregate, keyed by provider player id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub stats: PlayerStatsAggregate,
    /// Recent match ids, newest first
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsAggregate {
    pub kills: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_matches: u32,
    pub damage_dealt: f64,
    pub headshot_kills: u32,
    pub longest_kill: f64,
    pub top10s: u32,
    pub kd: String,
    pub win_rate: String,
    pub top10_rate: String,
    pub avg_damage: u32,
    pub headshot_rate: String,
    pub weapons: Vec<WeaponSummary>,
    pub maps: Vec<MapSummary>,
    pub level: String,
    pub last_active: String,
    pub season: String,
    pub game_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponSummary {
    pub id: String,
    pub name: String,
    pub xp: f64,
    pub level_current: u32,
    pub kills: u32,
    pub most_defeats_in_a_game: u32,
    pub damage_player: f64,
    pub headshots: u32,
    pub groggies: u32,
    /// Share of the player's lifetime kills, in whole percent
    pub usage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub name: String,
    pub count: u32,
    pub percentage: String,
    pub matches: u32,
    pub kd: String,
    pub wins: u32,
    pub avg_rank: String,
}

/// One recent match reduced to what the map breakdown needs
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSample {
    pub map: String,
    pub created_at: String,
    pub kills: u32,
    pub placement: u32,
}
