use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use pubg_stats::provider::{
    LifetimeStatsDocument, Platform, PlayersDocument, ProviderError, RawMatchDocument,
    StatsProvider,
};

// ============================================================================
// Mock Provider
// ============================================================================

/// Provider double keyed by request path, recording every call it receives
#[derive(Clone, Default)]
pub struct MockStatsProvider {
    documents: Arc<RwLock<HashMap<String, Value>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockStatsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, key: impl Into<String>, document: Value) {
        self.documents.write().await.insert(key.into(), document);
    }

    /// Makes a key answer with an upstream 500 instead of a document
    pub async fn fail(&self, key: impl Into<String>) {
        self.failing.write().await.insert(key.into());
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    pub async fn calls_to(&self, key: &str) -> usize {
        self.calls.read().await.iter().filter(|k| *k == key).count()
    }

    async fn respond(&self, key: String) -> Result<Value, ProviderError> {
        self.calls.write().await.push(key.clone());

        if self.failing.read().await.contains(&key) {
            return Err(ProviderError::Status {
                status: 500,
                body: "upstream failure".to_string(),
            });
        }

        self.documents
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or(ProviderError::NotFound(key))
    }
}

pub fn player_key(platform: Platform, player_name: &str) -> String {
    format!("{}/players?name={}", platform, player_name.to_lowercase())
}

pub fn lifetime_key(platform: Platform, player_id: &str) -> String {
    format!("{}/players/{}/seasons/lifetime", platform, player_id)
}

pub fn weapon_mastery_key(platform: Platform, player_id: &str) -> String {
    format!("{}/players/{}/weapon_mastery", platform, player_id)
}

pub fn survival_mastery_key(platform: Platform, player_id: &str) -> String {
    format!("{}/players/{}/survival_mastery", platform, player_id)
}

pub fn match_key(platform: Platform, match_id: &str) -> String {
    format!("{}/matches/{}", platform, match_id)
}

#[async_trait]
impl StatsProvider for MockStatsProvider {
    async fn get_players_by_name(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<PlayersDocument, ProviderError> {
        let document = self.respond(player_key(platform, player_name)).await?;
        Ok(serde_json::from_value(document)?)
    }

    async fn get_lifetime_stats(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<LifetimeStatsDocument, ProviderError> {
        let document = self.respond(lifetime_key(platform, player_id)).await?;
        Ok(serde_json::from_value(document)?)
    }

    async fn get_weapon_mastery(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<Value, ProviderError> {
        self.respond(weapon_mastery_key(platform, player_id)).await
    }

    async fn get_survival_mastery(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<Value, ProviderError> {
        self.respond(survival_mastery_key(platform, player_id)).await
    }

    async fn get_match(
        &self,
        platform: Platform,
        match_id: &str,
    ) -> Result<RawMatchDocument, ProviderError> {
        let document = self.respond(match_key(platform, match_id)).await?;
        Ok(serde_json::from_value(document)?)
    }

    async fn get_telemetry(&self, telemetry_url: &str) -> Result<Value, ProviderError> {
        self.respond(telemetry_url.to_string()).await
    }
}
