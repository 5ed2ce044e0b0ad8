use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::SearchEntry,
    service::SearchService,
    types::{FavoriteRequest, FavoriteResponse, SearchRequest, SuccessResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for recording a player search
///
/// POST /api/search
#[instrument(name = "record_search", skip(state))]
pub async fn record_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let service = SearchService::new(Arc::clone(&state.search_repository));
    service.record_search(request).await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// HTTP handler for the newest searches
///
/// GET /api/recent-searches
#[instrument(name = "recent_searches", skip(state))]
pub async fn recent_searches(
    State(state): State<AppState>,
) -> Result<Json<Vec<SearchEntry>>, AppError> {
    let service = SearchService::new(Arc::clone(&state.search_repository));
    let searches = service.recent_searches().await?;

    info!(count = searches.len(), "Recent searches listed");

    Ok(Json(searches))
}

/// HTTP handler for marking a player as favorite
///
/// POST /api/favorites
#[instrument(name = "set_favorite", skip(state))]
pub async fn set_favorite(
    State(state): State<AppState>,
    Json(request): Json<FavoriteRequest>,
) -> Result<Json<FavoriteResponse>, AppError> {
    let service = SearchService::new(Arc::clone(&state.search_repository));
    let favorite = service.set_favorite(request).await?;

    Ok(Json(FavoriteResponse {
        success: true,
        favorite,
    }))
}
