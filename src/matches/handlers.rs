use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::NormalizedMatch, service::MatchService};
use crate::shared::{parse_platform, AppError, AppState};

/// `?platform=` on match routes, defaulting to steam
#[derive(Debug, Deserialize)]
pub struct PlatformQuery {
    pub platform: Option<String>,
}

impl PlatformQuery {
    pub fn platform_or_default(&self) -> &str {
        self.platform.as_deref().unwrap_or("steam")
    }
}

/// HTTP handler for a single normalized match
///
/// GET /api/matches/:match_id?platform=steam
#[instrument(name = "get_match", skip(state))]
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Query(query): Query<PlatformQuery>,
) -> Result<Json<NormalizedMatch>, AppError> {
    let platform = parse_platform(query.platform_or_default())?;
    if match_id.trim().is_empty() {
        return Err(AppError::BadRequest("Match ID is required".to_string()));
    }

    let service = MatchService::new(Arc::clone(&state.provider), Arc::clone(&state.cache));
    let normalized = service.get_match(platform, &match_id).await?;

    info!(match_id = %normalized.id, "Match served");

    Ok(Json(normalized))
}
