use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;
use crate::{matches, players, search, telemetry};

/// Every `/api` route, with request tracing and permissive CORS
pub fn build_router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/players/:platform/:player_name", get(players::get_player))
        .route(
            "/players/:platform/:player_name/stats",
            get(players::get_player_stats),
        )
        .route(
            "/players/:platform/:player_name/matches",
            get(players::get_player_matches),
        )
        .route(
            "/players/:platform/:player_name/weapon_mastery",
            get(players::get_weapon_mastery),
        )
        .route(
            "/players/:platform/:player_name/survival_mastery",
            get(players::get_survival_mastery),
        )
        .route("/matches/:match_id", get(matches::get_match))
        .route(
            "/matches/:match_id/telemetry",
            get(telemetry::get_match_telemetry),
        )
        .route("/search", post(search::record_search))
        .route("/recent-searches", get(search::recent_searches))
        .route("/favorites", post(search::set_favorite));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
