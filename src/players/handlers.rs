use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::PlayerService,
    types::{PlayerPath, PlayerProfileResponse, PlayerStatsResponse},
};
use crate::matches::PlayerMatchSummary;
use crate::shared::{parse_platform, AppError, AppState};

fn player_service(state: &AppState) -> PlayerService {
    PlayerService::new(
        Arc::clone(&state.provider),
        Arc::clone(&state.cache),
        Arc::clone(&state.search_repository),
        Arc::clone(&state.config),
    )
}

/// HTTP handler for a player's full profile
///
/// GET /api/players/:platform/:player_name
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(path): Path<PlayerPath>,
) -> Result<Json<PlayerProfileResponse>, AppError> {
    let platform = parse_platform(&path.platform)?;
    let service = player_service(&state);

    let profile = service.lookup(platform, &path.player_name).await?;
    let is_favorite = service.is_favorite(platform, &path.player_name).await?;

    info!(player_id = %profile.id, "Player profile served");

    Ok(Json(PlayerProfileResponse {
        profile,
        is_favorite,
    }))
}

/// HTTP handler for a player's aggregated stats
///
/// GET /api/players/:platform/:player_name/stats
#[instrument(name = "get_player_stats", skip(state))]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(path): Path<PlayerPath>,
) -> Result<Json<PlayerStatsResponse>, AppError> {
    let platform = parse_platform(&path.platform)?;
    let service = player_service(&state);

    let profile = service.lookup(platform, &path.player_name).await?;
    let is_favorite = service.is_favorite(platform, &path.player_name).await?;

    Ok(Json(PlayerStatsResponse {
        stats: profile.stats,
        is_favorite,
    }))
}

/// GET /api/players/:platform/:player_name/matches
#[instrument(name = "get_player_matches", skip(state))]
pub async fn get_player_matches(
    State(state): State<AppState>,
    Path(path): Path<PlayerPath>,
) -> Result<Json<Vec<PlayerMatchSummary>>, AppError> {
    let platform = parse_platform(&path.platform)?;
    let summaries = player_service(&state)
        .player_matches(platform, &path.player_name)
        .await?;

    Ok(Json(summaries))
}

/// GET /api/players/:platform/:player_name/weapon_mastery
#[instrument(name = "get_weapon_mastery", skip(state))]
pub async fn get_weapon_mastery(
    State(state): State<AppState>,
    Path(path): Path<PlayerPath>,
) -> Result<Json<Value>, AppError> {
    let platform = parse_platform(&path.platform)?;
    let document = player_service(&state)
        .weapon_mastery(platform, &path.player_name)
        .await?;

    Ok(Json(document))
}

/// GET /api/players/:platform/:player_name/survival_mastery
#[instrument(name = "get_survival_mastery", skip(state))]
pub async fn get_survival_mastery(
    State(state): State<AppState>,
    Path(path): Path<PlayerPath>,
) -> Result<Json<Value>, AppError> {
    let platform = parse_platform(&path.platform)?;
    let document = player_service(&state)
        .survival_mastery(platform, &path.player_name)
        .await?;

    Ok(Json(document))
}
