use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{SearchEntry, UserPreference, DEFAULT_REGION};
use crate::shared::AppError;

#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn add_search(&self, entry: SearchEntry) -> Result<(), AppError>;
    async fn recent_searches(&self, limit: usize) -> Result<Vec<SearchEntry>, AppError>;
    async fn save_preference(&self, preference: UserPreference) -> Result<UserPreference, AppError>;
    async fn set_favorite(
        &self,
        player_name: &str,
        platform: &str,
        favorite: bool,
    ) -> Result<UserPreference, AppError>;
    async fn get_preference(
        &self,
        player_name: &str,
        platform: &str,
    ) -> Result<Option<UserPreference>, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemorySearchRepository {
    history: Arc<RwLock<Vec<SearchEntry>>>,
    preferences: Arc<RwLock<Vec<UserPreference>>>,
}

impl InMemorySearchRepository {
    pub fn new() -> Self {
        Self {
            history: Arc::new(RwLock::new(Vec::new())),
            preferences: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl SearchRepository for InMemorySearchRepository {
    async fn add_search(&self, entry: SearchEntry) -> Result<(), AppError> {
        let mut history = self.history.write().await;
        history.push(entry);
        Ok(())
    }

    async fn recent_searches(&self, limit: usize) -> Result<Vec<SearchEntry>, AppError> {
        let history = self.history.read().await;
        let mut newest_first: Vec<SearchEntry> = history.iter().rev().cloned().collect();
        // Insertion order breaks timestamp ties
        newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        newest_first.truncate(limit);
        Ok(newest_first)
    }

    async fn save_preference(&self, preference: UserPreference) -> Result<UserPreference, AppError> {
        let mut preferences = self.preferences.write().await;
        match preferences
            .iter_mut()
            .find(|p| p.matches(&preference.player_name, &preference.platform))
        {
            Some(existing) => {
                existing.region = preference.region;
                existing.favorite = preference.favorite;
                existing.last_searched = Utc::now();
                Ok(existing.clone())
            }
            None => {
                preferences.push(preference.clone());
                Ok(preference)
            }
        }
    }

    async fn set_favorite(
        &self,
        player_name: &str,
        platform: &str,
        favorite: bool,
    ) -> Result<UserPreference, AppError> {
        let mut preferences = self.preferences.write().await;
        match preferences
            .iter_mut()
            .find(|p| p.matches(player_name, platform))
        {
            Some(existing) => {
                existing.favorite = favorite;
                existing.last_searched = Utc::now();
                Ok(existing.clone())
            }
            None => {
                let preference = UserPreference::new(player_name, platform, DEFAULT_REGION, favorite);
                preferences.push(preference.clone());
                Ok(preference)
            }
        }
    }

    async fn get_preference(
        &self,
        player_name: &str,
        platform: &str,
    ) -> Result<Option<UserPreference>, AppError> {
        let preferences = self.preferences.read().await;
        Ok(preferences
            .iter()
            .find(|p| p.matches(player_name, platform))
            .cloned())
    }
}
