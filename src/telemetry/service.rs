use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::models::{TelemetryProjection, TelemetryResponse};
use super::reconstructor::reconstruct;
use crate::cache::CacheRepository;
use crate::matches::MatchService;
use crate::provider::{Platform, StatsProvider};
use crate::shared::AppError;

pub struct TelemetryService {
    provider: Arc<dyn StatsProvider>,
    matches: MatchService,
}

impl TelemetryService {
    pub fn new(provider: Arc<dyn StatsProvider>, cache: Arc<dyn CacheRepository>) -> Self {
        Self {
            matches: MatchService::new(Arc::clone(&provider), cache),
            provider,
        }
    }

    /// Reconstructs the telemetry of a match
    ///
    /// Errors from the match lookup propagate. A missing telemetry asset,
    /// a failed download or an unreadable stream all produce an empty
    /// projection for the known map and duration.
    #[instrument(skip(self))]
    pub async fn get_telemetry(
        &self,
        platform: Platform,
        match_id: &str,
    ) -> Result<TelemetryResponse, AppError> {
        let normalized = self.matches.get_match(platform, match_id).await?;

        let projection = if normalized.telemetry_url.is_empty() {
            info!(match_id = %match_id, "Match has no telemetry asset");
            TelemetryProjection::empty()
        } else {
            match self.provider.get_telemetry(&normalized.telemetry_url).await {
                Ok(stream) => reconstruct(stream).unwrap_or_else(|e| {
                    warn!(match_id = %match_id, error = %e, "Discarding telemetry");
                    TelemetryProjection::empty()
                }),
                Err(e) => {
                    warn!(match_id = %match_id, error = %e, "Telemetry download failed");
                    TelemetryProjection::empty()
                }
            }
        };

        Ok(TelemetryResponse {
            projection,
            map: normalized.map,
            duration: normalized.duration,
        })
    }
}
