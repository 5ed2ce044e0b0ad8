use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use pubg_stats::{
    build_router, AppConfig, AppState, InMemoryCacheRepository, InMemorySearchRepository,
};

use super::mocks::MockStatsProvider;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestApp {
    pub provider: MockStatsProvider,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_cache_ttl(chrono::Duration::hours(1))
    }

    pub fn with_cache_ttl(ttl: chrono::Duration) -> Self {
        let provider = MockStatsProvider::new();
        let state = AppState::new(
            Arc::new(provider.clone()),
            Arc::new(InMemoryCacheRepository::new(ttl)),
            Arc::new(InMemorySearchRepository::new()),
            Arc::new(AppConfig::default()),
        );

        Self {
            provider,
            router: build_router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
