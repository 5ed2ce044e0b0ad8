use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::errors::ProviderError;
use super::models::{LifetimeStatsDocument, Platform, PlayersDocument, RawMatchDocument};

const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Trait for the external stats provider
///
/// Mastery documents and telemetry come back as raw JSON: mastery is also
/// served unchanged to clients, and telemetry shape is validated by the
/// reconstructor rather than at the transport boundary.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn get_players_by_name(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<PlayersDocument, ProviderError>;

    async fn get_lifetime_stats(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<LifetimeStatsDocument, ProviderError>;

    async fn get_weapon_mastery(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<Value, ProviderError>;

    async fn get_survival_mastery(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<Value, ProviderError>;

    async fn get_match(
        &self,
        platform: Platform,
        match_id: &str,
    ) -> Result<RawMatchDocument, ProviderError>;

    async fn get_telemetry(&self, telemetry_url: &str) -> Result<Value, ProviderError>;
}

/// HTTP implementation of `StatsProvider` against the PUBG JSON:API
pub struct PubgApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl PubgApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let http = Client::builder().gzip(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn shard_url(&self, platform: Platform, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, platform, path)
    }

    async fn get_api<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        debug!(url = %url, "Requesting provider resource");

        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .send()
            .await?;

        decode_response(url, response).await
    }
}

async fn decode_response<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        debug!(url = %url, "Provider resource not found");
        return Err(ProviderError::NotFound(url.to_string()));
    }

    let body = response.text().await?;
    if !status.is_success() {
        warn!(url = %url, status = status.as_u16(), "Provider request failed");
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl StatsProvider for PubgApiClient {
    #[instrument(skip(self))]
    async fn get_players_by_name(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<PlayersDocument, ProviderError> {
        let url = self.shard_url(platform, "players");
        self.get_api(&url, &[("filter[playerNames]", player_name)])
            .await
    }

    #[instrument(skip(self))]
    async fn get_lifetime_stats(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<LifetimeStatsDocument, ProviderError> {
        let url = self.shard_url(platform, &format!("players/{}/seasons/lifetime", player_id));
        self.get_api(&url, &[]).await
    }

    #[instrument(skip(self))]
    async fn get_weapon_mastery(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<Value, ProviderError> {
        let url = self.shard_url(platform, &format!("players/{}/weapon_mastery", player_id));
        self.get_api(&url, &[]).await
    }

    #[instrument(skip(self))]
    async fn get_survival_mastery(
        &self,
        platform: Platform,
        player_id: &str,
    ) -> Result<Value, ProviderError> {
        let url = self.shard_url(platform, &format!("players/{}/survival_mastery", player_id));
        self.get_api(&url, &[]).await
    }

    #[instrument(skip(self))]
    async fn get_match(
        &self,
        platform: Platform,
        match_id: &str,
    ) -> Result<RawMatchDocument, ProviderError> {
        let url = self.shard_url(platform, &format!("matches/{}", match_id));
        self.get_api(&url, &[]).await
    }

    #[instrument(skip(self))]
    async fn get_telemetry(&self, telemetry_url: &str) -> Result<Value, ProviderError> {
        // Telemetry is served from a public CDN, no API key
        let response = self.http.get(telemetry_url).send().await?;
        decode_response(telemetry_url, response).await
    }
}
