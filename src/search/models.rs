use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "pc-na";

/// One player lookup, newest entries are served first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub player_name: String,
    pub platform: String,
    pub timestamp: DateTime<Utc>,
}

impl SearchEntry {
    pub fn now(player_name: &str, platform: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            platform: platform.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Per-player preferences, unique on `(player_name, platform)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub player_name: String,
    pub platform: String,
    pub region: String,
    pub favorite: bool,
    pub last_searched: DateTime<Utc>,
}

impl UserPreference {
    pub fn new(player_name: &str, platform: &str, region: &str, favorite: bool) -> Self {
        Self {
            player_name: player_name.to_string(),
            platform: platform.to_string(),
            region: region.to_string(),
            favorite,
            last_searched: Utc::now(),
        }
    }

    pub fn matches(&self, player_name: &str, platform: &str) -> bool {
        self.player_name == player_name && self.platform == platform
    }
}
