use chrono::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.pubg.com/shards";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_CACHE_TTL_SECS: i64 = 60 * 60;
const DEFAULT_RECENT_MATCH_LIMIT: usize = 10;
const DEFAULT_PLAYER_MATCHES_LIMIT: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration, read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub bind_addr: String,
    /// How long player and match aggregates stay cached
    pub cache_ttl: Duration,
    /// Recent matches sampled for per-map statistics
    pub recent_match_limit: usize,
    /// Recent matches listed on a player's match history
    pub player_matches_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cache_ttl: Duration::seconds(DEFAULT_CACHE_TTL_SECS),
            recent_match_limit: DEFAULT_RECENT_MATCH_LIMIT,
            player_matches_limit: DEFAULT_PLAYER_MATCHES_LIMIT,
        }
    }
}

impl AppConfig {
    /// Reads `PUBG_API_KEY` (required), `PUBG_API_BASE_URL`, `BIND_ADDR`,
    /// `CACHE_TTL_SECS`, `RECENT_MATCH_LIMIT` and `PLAYER_MATCHES_LIMIT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let setting = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = setting("PUBG_API_KEY").ok_or(ConfigError::Missing("PUBG_API_KEY"))?;

        Ok(Self {
            api_key,
            api_base_url: setting("PUBG_API_BASE_URL").unwrap_or(defaults.api_base_url),
            bind_addr: setting("BIND_ADDR").unwrap_or(defaults.bind_addr),
            cache_ttl: match setting("CACHE_TTL_SECS") {
                Some(raw) => Duration::seconds(parse_setting("CACHE_TTL_SECS", &raw)?),
                None => defaults.cache_ttl,
            },
            recent_match_limit: match setting("RECENT_MATCH_LIMIT") {
                Some(raw) => parse_setting("RECENT_MATCH_LIMIT", &raw)?,
                None => defaults.recent_match_limit,
            },
            player_matches_limit: match setting("PLAYER_MATCHES_LIMIT") {
                Some(raw) => parse_setting("PLAYER_MATCHES_LIMIT", &raw)?,
                None => defaults.player_matches_limit,
            },
        })
    }
}

fn parse_setting<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
