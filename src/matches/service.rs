use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{models::NormalizedMatch, normalizer::normalize_match};
use crate::cache::CacheRepository;
use crate::provider::{Platform, StatsProvider};
use crate::shared::AppError;

/// Cache-aware match lookups
pub struct MatchService {
    provider: Arc<dyn StatsProvider>,
    cache: Arc<dyn CacheRepository>,
}

impl MatchService {
    pub fn new(provider: Arc<dyn StatsProvider>, cache: Arc<dyn CacheRepository>) -> Self {
        Self { provider, cache }
    }

    /// Returns the normalized match, fetching and caching it on a miss
    #[instrument(skip(self))]
    pub async fn get_match(
        &self,
        platform: Platform,
        match_id: &str,
    ) -> Result<NormalizedMatch, AppError> {
        if let Some(cached) = self.cache.get_match(match_id).await? {
            debug!(match_id = %match_id, "Serving match from cache");
            return Ok(cached);
        }

        let document = self.provider.get_match(platform, match_id).await?;
        let normalized = normalize_match(&document);

        self.cache.save_match(&normalized).await?;

        info!(
            match_id = %normalized.id,
            map = %normalized.map,
            player_count = normalized.player_count,
            "Match fetched and normalized"
        );

        Ok(normalized)
    }
}
