use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::CacheEntry;
use crate::matches::NormalizedMatch;
use crate::players::PlayerProfile;
use crate::shared::AppError;

/// Read-through cache for the two aggregate kinds, keyed by provider id
#[async_trait]
pub trait CacheRepository: Send + Sync {
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerProfile>, AppError>;
    async fn save_player(&self, profile: &PlayerProfile) -> Result<(), AppError>;
    async fn get_match(&self, match_id: &str) -> Result<Option<NormalizedMatch>, AppError>;
    async fn save_match(&self, normalized: &NormalizedMatch) -> Result<(), AppError>;
}

/// In-memory implementation of CacheRepository
///
/// Stale entries are left in place and overwritten on the next save; a read
/// past expiry is reported as a miss.
pub struct InMemoryCacheRepository {
    ttl: Duration,
    players: RwLock<HashMap<String, CacheEntry<PlayerProfile>>>,
    matches: RwLock<HashMap<String, CacheEntry<NormalizedMatch>>>,
}

impl InMemoryCacheRepository {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            players: RwLock::new(HashMap::new()),
            matches: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCacheRepository {
    fn default() -> Self {
        Self::new(Duration::hours(1))
    }
}

fn read_fresh<T: Clone>(entries: &HashMap<String, CacheEntry<T>>, key: &str) -> Option<T> {
    let entry = entries.get(key)?;
    let payload = entry.fresh_payload().cloned();
    if payload.is_none() {
        debug!(key = %key, expires_at = %entry.expires_at, "Cache entry expired");
    }
    payload
}

#[async_trait]
impl CacheRepository for InMemoryCacheRepository {
    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerProfile>, AppError> {
        let players = self.players.read().await;
        let hit = read_fresh(&players, player_id);
        debug!(player_id = %player_id, hit = hit.is_some(), "Player cache lookup");
        Ok(hit)
    }

    #[instrument(skip(self, profile), fields(player_id = %profile.id))]
    async fn save_player(&self, profile: &PlayerProfile) -> Result<(), AppError> {
        let mut players = self.players.write().await;
        players.insert(profile.id.clone(), CacheEntry::new(profile.clone(), self.ttl));
        debug!("Player cached");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_match(&self, match_id: &str) -> Result<Option<NormalizedMatch>, AppError> {
        let matches = self.matches.read().await;
        let hit = read_fresh(&matches, match_id);
        debug!(match_id = %match_id, hit = hit.is_some(), "Match cache lookup");
        Ok(hit)
    }

    #[instrument(skip(self, normalized), fields(match_id = %normalized.id))]
    async fn save_match(&self, normalized: &NormalizedMatch) -> Result<(), AppError> {
        let mut matches = self.matches.write().await;
        matches.insert(
            normalized.id.clone(),
            CacheEntry::new(normalized.clone(), self.ttl),
        );
        debug!("Match cached");
        Ok(())
    }
}
