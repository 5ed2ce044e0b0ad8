use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::TelemetryResponse, service::TelemetryService};
use crate::matches::PlatformQuery;
use crate::shared::{parse_platform, AppError, AppState};

/// HTTP handler for reconstructed match telemetry
///
/// GET /api/matches/:match_id/telemetry?platform=steam
#[instrument(name = "get_match_telemetry", skip(state))]
pub async fn get_match_telemetry(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Query(query): Query<PlatformQuery>,
) -> Result<Json<TelemetryResponse>, AppError> {
    let platform = parse_platform(query.platform_or_default())?;

    let service = TelemetryService::new(Arc::clone(&state.provider), Arc::clone(&state.cache));
    let response = service.get_telemetry(platform, &match_id).await?;

    info!(
        match_id = %match_id,
        positions = response.projection.player_positions.len(),
        kills = response.projection.player_kills.len(),
        "Telemetry served"
    );

    Ok(Json(response))
}
