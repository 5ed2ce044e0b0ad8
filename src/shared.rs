use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::cache::CacheRepository;
use crate::config::AppConfig;
use crate::provider::{Platform, ProviderError, StatsProvider};
use crate::search::SearchRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn StatsProvider>,
    pub cache: Arc<dyn CacheRepository>,
    pub search_repository: Arc<dyn SearchRepository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn StatsProvider>,
        cache: Arc<dyn CacheRepository>,
        search_repository: Arc<dyn SearchRepository>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            provider,
            cache,
            search_repository,
            config,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Internal server error")]
    Internal,
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(resource) => AppError::NotFound(resource),
            other => AppError::Provider(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Provider(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Provider error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Parses a platform path segment or query value
pub fn parse_platform(raw: &str) -> Result<Platform, AppError> {
    Platform::from_str(raw.trim())
        .map_err(|_| AppError::BadRequest(format!("Unknown platform: {}", raw)))
}
