use pubg_stats::{
    build_router, AppConfig, AppState, InMemoryCacheRepository, InMemorySearchRepository,
    PubgApiClient,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pubg_stats=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(message) = run().await {
        error!(error = %message, "Server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(base_url = %config.api_base_url, "Starting player stats server");

    let provider = PubgApiClient::new(&config.api_base_url, &config.api_key)
        .map_err(|e| e.to_string())?;
    let cache = InMemoryCacheRepository::new(config.cache_ttl);
    let bind_addr = config.bind_addr.clone();

    let app_state = AppState::new(
        Arc::new(provider),
        Arc::new(cache),
        Arc::new(InMemorySearchRepository::new()),
        Arc::new(config),
    );
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", bind_addr, e))?;
    info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| e.to_string())
}
