use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::{SearchEntry, UserPreference};
use super::repository::SearchRepository;
use super::types::{FavoriteRequest, SearchRequest};
use crate::shared::AppError;

pub const RECENT_SEARCH_LIMIT: usize = 10;
const DEFAULT_PLATFORM: &str = "steam";

pub struct SearchService {
    repository: Arc<dyn SearchRepository>,
}

impl SearchService {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }

    /// Stores the searcher's preferences and a history entry
    #[instrument(skip(self, request), fields(player_name = %request.player_name))]
    pub async fn record_search(&self, request: SearchRequest) -> Result<(), AppError> {
        let player_name = required("playerName", &request.player_name)?;
        let platform = required("platform", &request.platform)?;
        let region = required("region", &request.region)?;

        self.repository
            .save_preference(UserPreference::new(player_name, platform, region, false))
            .await?;
        self.record_lookup(player_name, platform).await
    }

    /// Appends a history entry for a player lookup
    pub async fn record_lookup(&self, player_name: &str, platform: &str) -> Result<(), AppError> {
        debug!(player_name = %player_name, platform = %platform, "Recording search");
        self.repository
            .add_search(SearchEntry::now(player_name, platform))
            .await
    }

    pub async fn recent_searches(&self) -> Result<Vec<SearchEntry>, AppError> {
        self.repository.recent_searches(RECENT_SEARCH_LIMIT).await
    }

    #[instrument(skip(self, request), fields(player_name = %request.player_name))]
    pub async fn set_favorite(&self, request: FavoriteRequest) -> Result<bool, AppError> {
        let player_name = required("playerName", &request.player_name)?;
        let platform = request
            .platform
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_PLATFORM);

        let preference = self
            .repository
            .set_favorite(player_name, platform, request.favorite)
            .await?;
        Ok(preference.favorite)
    }

    pub async fn is_favorite(&self, player_name: &str, platform: &str) -> Result<bool, AppError> {
        Ok(self
            .repository
            .get_preference(player_name, platform)
            .await?
            .is_some_and(|p| p.favorite))
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed)
}
