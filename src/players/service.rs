use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::aggregator::aggregate;
use super::models::{MatchSample, PlayerProfile};
use crate::cache::CacheRepository;
use crate::config::AppConfig;
use crate::matches::{MatchService, PlayerMatchSummary};
use crate::provider::{
    lenient, Platform, PlayerEntity, ProviderError, StatsProvider, SurvivalMasteryDocument,
    WeaponMasteryDocument,
};
use crate::search::{SearchRepository, SearchService};
use crate::shared::AppError;

pub struct PlayerService {
    provider: Arc<dyn StatsProvider>,
    cache: Arc<dyn CacheRepository>,
    matches: MatchService,
    searches: SearchService,
    config: Arc<AppConfig>,
}

impl PlayerService {
    pub fn new(
        provider: Arc<dyn StatsProvider>,
        cache: Arc<dyn CacheRepository>,
        search_repository: Arc<dyn SearchRepository>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            matches: MatchService::new(Arc::clone(&provider), Arc::clone(&cache)),
            searches: SearchService::new(search_repository),
            provider,
            cache,
            config,
        }
    }

    /// Resolves a player name to the provider's player entity
    async fn resolve_player(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<PlayerEntity, AppError> {
        if player_name.trim().is_empty() {
            return Err(AppError::BadRequest("Player name is required".to_string()));
        }

        let document = self
            .provider
            .get_players_by_name(platform, player_name)
            .await?;

        document
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Player not found: {}", player_name)))
    }

    /// Full player profile, served from cache while fresh
    #[instrument(skip(self))]
    pub async fn lookup(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<PlayerProfile, AppError> {
        let player = self.resolve_player(platform, player_name).await?;
        self.searches
            .record_lookup(player_name, platform.as_ref())
            .await?;

        if let Some(cached) = self.cache.get_player(&player.id).await? {
            debug!(player_id = %player.id, "Serving player from cache");
            return Ok(cached);
        }

        let lifetime = self
            .provider
            .get_lifetime_stats(platform, &player.id)
            .await?;

        let (weapon_mastery, survival_mastery) = tokio::join!(
            self.provider.get_weapon_mastery(platform, &player.id),
            self.provider.get_survival_mastery(platform, &player.id),
        );
        let weapon_mastery: Option<WeaponMasteryDocument> =
            lenient::decode_optional(soften(weapon_mastery, &player.id, "weapon mastery"));
        let survival_mastery: Option<SurvivalMasteryDocument> =
            lenient::decode_optional(soften(survival_mastery, &player.id, "survival mastery"));

        let match_ids = player.recent_match_ids(self.config.recent_match_limit);
        let samples = self.sample_matches(platform, &player.id, &match_ids).await;

        let stats = aggregate(
            &lifetime,
            weapon_mastery.as_ref(),
            survival_mastery.as_ref(),
            &samples,
        );

        let profile = PlayerProfile {
            name: player
                .attributes
                .name
                .clone()
                .unwrap_or_else(|| player_name.to_string()),
            id: player.id,
            platform: platform.to_string(),
            stats,
            matches: match_ids,
        };

        self.cache.save_player(&profile).await?;

        info!(
            player_id = %profile.id,
            sampled_matches = samples.len(),
            total_matches = profile.stats.total_matches,
            "Player profile aggregated"
        );

        Ok(profile)
    }

    /// Fetches recent matches concurrently and keeps this player's line of each
    async fn sample_matches(
        &self,
        platform: Platform,
        player_id: &str,
        match_ids: &[String],
    ) -> Vec<MatchSample> {
        let lookups = match_ids
            .iter()
            .map(|match_id| self.matches.get_match(platform, match_id));

        join_all(lookups)
            .await
            .into_iter()
            .zip(match_ids)
            .filter_map(|(result, match_id)| match result {
                Ok(normalized) => {
                    let participant = normalized.participant_by_player_id(player_id)?;
                    Some(MatchSample {
                        map: normalized.map.clone(),
                        created_at: normalized.created_at.clone(),
                        kills: participant.kills,
                        placement: participant.rank,
                    })
                }
                Err(e) => {
                    warn!(match_id = %match_id, error = %e, "Skipping sample match");
                    None
                }
            })
            .collect()
    }

    /// This player's line from each of their most recent matches
    #[instrument(skip(self))]
    pub async fn player_matches(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<Vec<PlayerMatchSummary>, AppError> {
        let profile = self.lookup(platform, player_name).await?;
        let match_ids: Vec<&String> = profile
            .matches
            .iter()
            .take(self.config.player_matches_limit)
            .collect();

        let results = join_all(
            match_ids
                .iter()
                .map(|match_id| self.matches.get_match(platform, match_id)),
        )
        .await;

        let summaries: Vec<PlayerMatchSummary> = results
            .into_iter()
            .zip(&match_ids)
            .filter_map(|(result, match_id)| match result {
                Ok(normalized) => normalized
                    .participant_by_name(player_name)
                    .map(|participant| PlayerMatchSummary::new(&normalized, participant)),
                Err(e) => {
                    warn!(match_id = %match_id, error = %e, "Skipping match in history");
                    None
                }
            })
            .collect();

        info!(
            player_name = %player_name,
            match_count = summaries.len(),
            "Player matches collected"
        );

        Ok(summaries)
    }

    /// Raw weapon mastery document of a player
    #[instrument(skip(self))]
    pub async fn weapon_mastery(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<Value, AppError> {
        let player = self.resolve_player(platform, player_name).await?;
        Ok(self.provider.get_weapon_mastery(platform, &player.id).await?)
    }

    /// Raw survival mastery document of a player
    #[instrument(skip(self))]
    pub async fn survival_mastery(
        &self,
        platform: Platform,
        player_name: &str,
    ) -> Result<Value, AppError> {
        let player = self.resolve_player(platform, player_name).await?;
        Ok(self
            .provider
            .get_survival_mastery(platform, &player.id)
            .await?)
    }

    pub async fn is_favorite(&self, platform: Platform, player_name: &str) -> Result<bool, AppError> {
        self.searches
            .is_favorite(player_name, platform.as_ref())
            .await
    }
}

/// Turns an optional enrichment failure into absence
fn soften(result: Result<Value, ProviderError>, player_id: &str, source: &str) -> Option<Value> {
    result
        .map_err(|e| warn!(player_id = %player_id, source = %source, error = %e, "Enrichment unavailable"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCacheRepository;
    use crate::search::InMemorySearchRepository;
    use crate::shared::test_utils::{match_document, FakeProvider, ParticipantFixture};
    use serde_json::json;

    fn alpha(kills: u32, win_place: u32) -> ParticipantFixture<'static> {
        ParticipantFixture {
            name: "Alpha",
            player_id: "account.alpha",
            kills,
            win_place,
            team_id: 1,
        }
    }

    fn bravo() -> ParticipantFixture<'static> {
        ParticipantFixture {
            name: "bravo",
            player_id: "account.bravo",
            kills: 2,
            win_place: 4,
            team_id: 2,
        }
    }

    fn provider() -> FakeProvider {
        FakeProvider::new()
            .with_player("Alpha", "account.alpha", &["m1", "m2", "m3", "m4"])
            .with_lifetime(
                "account.alpha",
                json!({"data": {"attributes": {"gameModeStats": {
                    "squad-fpp": {"kills": 20, "wins": 2, "losses": 8, "roundsPlayed": 10, "damageDealt": 1500.0}
                }}}}),
            )
            .with_survival_mastery(
                "account.alpha",
                json!({"data": {"attributes": {"level": 55, "lastMatchDate": "2024-11-20T08:00:00Z"}}}),
            )
            .with_match("m1", match_document("m1", "Erangel_Main", &[alpha(4, 1), bravo()], None))
            .with_match("m2", match_document("m2", "Erangel_Main", &[alpha(1, 7), bravo()], None))
            .with_match("m3", match_document("m3", "Desert_Main", &[alpha(0, 20), bravo()], None))
    }

    fn service(provider: Arc<FakeProvider>) -> (PlayerService, Arc<InMemorySearchRepository>) {
        let searches = Arc::new(InMemorySearchRepository::new());
        let service = PlayerService::new(
            provider,
            Arc::new(InMemoryCacheRepository::default()),
            searches.clone(),
            Arc::new(AppConfig::default()),
        );
        (service, searches)
    }

    #[tokio::test]
    async fn lookup_aggregates_and_tolerates_missing_sample() {
        let (service, _) = service(Arc::new(provider()));

        let profile = service.lookup(Platform::Steam, "Alpha").await.unwrap();

        assert_eq!(profile.id, "account.alpha");
        assert_eq!(profile.platform, "steam");
        assert_eq!(profile.matches, vec!["m1", "m2", "m3", "m4"]);
        assert_eq!(profile.stats.kd, "2.50");
        assert_eq!(profile.stats.level, "55");
        assert_eq!(profile.stats.last_active, "11/20/2024");
        assert!(profile.stats.weapons.is_empty());

        // m4 is unknown to the provider and is left out of the sample
        assert_eq!(profile.stats.maps.len(), 2);
        assert_eq!(profile.stats.maps[0].name, "Erangel");
        assert_eq!(profile.stats.maps[0].count, 2);
        assert_eq!(profile.stats.maps[0].wins, 1);
        assert_eq!(profile.stats.maps[1].name, "Miramar");
    }

    #[tokio::test]
    async fn second_lookup_uses_cached_profile_and_records_history() {
        let provider = Arc::new(provider());
        let (service, searches) = service(provider.clone());

        let first = service.lookup(Platform::Steam, "Alpha").await.unwrap();
        let calls_after_first = provider.match_calls();
        let second = service.lookup(Platform::Steam, "alpha").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.match_calls(), calls_after_first);
        assert_eq!(searches.recent_searches(10).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_player_is_not_found() {
        let (service, searches) = service(Arc::new(provider()));

        let result = service.lookup(Platform::Steam, "ghost").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(searches.recent_searches(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_lifetime_stats_fail_the_lookup() {
        let provider = FakeProvider::new().with_player("Nomad", "account.nomad", &[]);
        let (service, _) = service(Arc::new(provider));

        let result = service.lookup(Platform::Steam, "Nomad").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn player_matches_match_name_case_insensitively() {
        let (service, _) = service(Arc::new(provider()));

        let summaries = service.player_matches(Platform::Steam, "alpha").await.unwrap();

        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
        assert_eq!(summaries[0].placement, 1);
        assert_eq!(summaries[0].kills, 4);
        assert_eq!(summaries[0].damage, 402);
        assert_eq!(summaries[0].duration, 1750);
        assert_eq!(summaries[0].assists, 1);
    }

    #[tokio::test]
    async fn mastery_documents_pass_through() {
        let document = json!({"data": {"attributes": {"weaponSummaries": {}}}, "extra": [1, 2]});
        let provider = provider().with_weapon_mastery("account.alpha", document.clone());
        let (service, _) = service(Arc::new(provider));

        assert_eq!(
            service.weapon_mastery(Platform::Steam, "Alpha").await.unwrap(),
            document
        );
        assert!(matches!(
            service.survival_mastery(Platform::Steam, "ghost").await,
            Err(AppError::NotFound(_))
        ));
    }
}
