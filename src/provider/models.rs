//! Raw provider documents.
//!
//! These mirror the JSON:API payloads of the stats provider. Nearly every
//! field is optional or defaulted: the provider omits fields freely and the
//! normalizers treat absence as "unknown", never as an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumString};

use super::lenient;

/// Provider shard a player or match lives on
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Steam,
    Kakao,
    Psn,
    Xbox,
    Stadia,
    Console,
    Tournament,
}

/// Reference to another resource (`{ "type": ..., "id": ... }`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResourceList {
    #[serde(default, deserialize_with = "lenient::seq_or_empty")]
    pub data: Vec<ResourceRef>,
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayersDocument {
    #[serde(default, deserialize_with = "lenient::seq_or_empty")]
    pub data: Vec<PlayerEntity>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerEntity {
    pub id: String,
    #[serde(default)]
    pub attributes: PlayerAttributes,
    #[serde(default)]
    pub relationships: PlayerRelationships,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shard_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerRelationships {
    #[serde(default)]
    pub matches: ResourceList,
}

impl PlayerEntity {
    /// Most recent match ids, newest first, as the provider orders them
    pub fn recent_match_ids(&self, limit: usize) -> Vec<String> {
        self.relationships
            .matches
            .data
            .iter()
            .take(limit)
            .map(|m| m.id.clone())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Lifetime stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LifetimeStatsDocument {
    pub data: LifetimeStatsData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LifetimeStatsData {
    #[serde(default)]
    pub attributes: LifetimeStatsAttributes,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeStatsAttributes {
    /// Keyed by provider mode token (`solo`, `duo-fpp`, `squad-fpp`, ...)
    #[serde(default)]
    pub game_mode_stats: BTreeMap<String, GameModeStats>,
}

/// Per game-mode lifetime counters
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameModeStats {
    pub kills: u32,
    pub losses: u32,
    pub wins: u32,
    pub damage_dealt: f64,
    pub headshot_kills: u32,
    pub longest_kill: f64,
    pub rounds_played: u32,
    pub top10s: u32,
}

// ---------------------------------------------------------------------------
// Mastery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WeaponMasteryDocument {
    #[serde(default)]
    pub data: Option<WeaponMasteryData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WeaponMasteryData {
    #[serde(default)]
    pub attributes: Option<WeaponMasteryAttributes>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponMasteryAttributes {
    /// Keyed by raw weapon id, e.g. `Item_Weapon_AK47_C`
    #[serde(default)]
    pub weapon_summaries: Option<BTreeMap<String, WeaponMasteryEntry>>,
}

impl WeaponMasteryDocument {
    pub fn summaries(&self) -> Option<&BTreeMap<String, WeaponMasteryEntry>> {
        self.data
            .as_ref()
            .and_then(|data| data.attributes.as_ref())
            .and_then(|attributes| attributes.weapon_summaries.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WeaponMasteryEntry {
    #[serde(rename = "XPTotal")]
    pub xp_total: Option<f64>,
    pub level_current: Option<u32>,
    pub stats_total: Option<WeaponStatBucket>,
    pub official_stats_total: Option<WeaponStatBucket>,
    pub competitive_stats_total: Option<WeaponStatBucket>,
}

impl WeaponMasteryEntry {
    /// The three stat buckets in a fixed order; any of them may be absent
    pub fn buckets(&self) -> [Option<&WeaponStatBucket>; 3] {
        [
            self.stats_total.as_ref(),
            self.official_stats_total.as_ref(),
            self.competitive_stats_total.as_ref(),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WeaponStatBucket {
    pub most_defeats_in_a_game: Option<f64>,
    pub kills: Option<f64>,
    pub damage_player: Option<f64>,
    pub head_shots: Option<f64>,
    pub groggies: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurvivalMasteryDocument {
    #[serde(default)]
    pub data: Option<SurvivalMasteryData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurvivalMasteryData {
    #[serde(default)]
    pub attributes: Option<SurvivalMasteryAttributes>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurvivalMasteryAttributes {
    pub level: Option<u32>,
    pub last_match_date: Option<String>,
}

impl SurvivalMasteryDocument {
    pub fn attributes(&self) -> Option<&SurvivalMasteryAttributes> {
        self.data.as_ref().and_then(|data| data.attributes.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMatchDocument {
    pub data: MatchEntity,
    #[serde(default, deserialize_with = "lenient::seq_or_empty")]
    pub included: Vec<IncludedEntity>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatchEntity {
    pub id: String,
    #[serde(default)]
    pub attributes: MatchAttributes,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchAttributes {
    pub map_name: Option<String>,
    pub duration: Option<f64>,
    pub created_at: Option<String>,
    pub game_mode: Option<String>,
    pub shard_id: Option<String>,
}

/// One entry of a match document's `included` array
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IncludedEntity {
    Participant(ParticipantEntity),
    Roster(RosterEntity),
    Asset(AssetEntity),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ParticipantEntity {
    pub id: String,
    #[serde(default)]
    pub attributes: ParticipantAttributes,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ParticipantAttributes {
    #[serde(default)]
    pub stats: ParticipantStats,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStats {
    pub name: Option<String>,
    pub player_id: Option<String>,
    pub kills: u32,
    pub damage_dealt: f64,
    pub assists: u32,
    pub revives: u32,
    pub win_place: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterEntity {
    pub id: String,
    #[serde(default)]
    pub attributes: RosterAttributes,
    #[serde(default)]
    pub relationships: RosterRelationships,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterAttributes {
    #[serde(default)]
    pub stats: RosterStats,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterStats {
    pub rank: Option<u32>,
    pub team_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterRelationships {
    #[serde(default)]
    pub participants: ResourceList,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssetEntity {
    pub id: String,
    #[serde(default)]
    pub attributes: AssetAttributes,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssetAttributes {
    #[serde(rename = "URL", alias = "url", default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!(Platform::from_str("steam").unwrap(), Platform::Steam);
        assert_eq!(Platform::from_str("PSN").unwrap(), Platform::Psn);
        assert!(Platform::from_str("dreamcast").is_err());
        assert_eq!(Platform::Kakao.to_string(), "kakao");
    }

    #[test]
    fn included_entities_are_dispatched_by_type() {
        let doc: RawMatchDocument = serde_json::from_value(json!({
            "data": {"id": "m1", "attributes": {"mapName": "Desert_Main"}},
            "included": [
                {"type": "participant", "id": "p1", "attributes": {"stats": {"name": "a"}}},
                {"type": "roster", "id": "r1"},
                {"type": "asset", "id": "a1", "attributes": {"URL": "https://x/telemetry.json"}},
                {"type": "something-new", "id": "z"},
                {"id": "untagged"}
            ]
        }))
        .unwrap();

        assert_eq!(doc.included.len(), 4);
        assert!(matches!(doc.included[0], IncludedEntity::Participant(_)));
        assert!(matches!(doc.included[1], IncludedEntity::Roster(_)));
        assert!(matches!(doc.included[3], IncludedEntity::Other));
        match &doc.included[2] {
            IncludedEntity::Asset(asset) => {
                assert_eq!(asset.attributes.url.as_deref(), Some("https://x/telemetry.json"))
            }
            other => panic!("expected asset, got {:?}", other),
        }
    }

    #[test]
    fn asset_url_accepts_lowercase_key() {
        let asset: AssetEntity =
            serde_json::from_value(json!({"id": "a", "attributes": {"url": "u"}})).unwrap();
        assert_eq!(asset.attributes.url.as_deref(), Some("u"));
    }

    #[test]
    fn recent_match_ids_respects_limit() {
        let player: PlayerEntity = serde_json::from_value(json!({
            "id": "account.1",
            "relationships": {"matches": {"data": [
                {"type": "match", "id": "m1"},
                {"type": "match", "id": "m2"},
                {"type": "match", "id": "m3"}
            ]}}
        }))
        .unwrap();

        assert_eq!(player.recent_match_ids(2), vec!["m1", "m2"]);
        assert_eq!(player.recent_match_ids(10).len(), 3);
    }

    #[test]
    fn weapon_entry_reads_pascal_case_buckets() {
        let entry: WeaponMasteryEntry = serde_json::from_value(json!({
            "XPTotal": 1200,
            "LevelCurrent": 7,
            "OfficialStatsTotal": {"Kills": 4, "HeadShots": 1}
        }))
        .unwrap();

        assert_eq!(entry.xp_total, Some(1200.0));
        assert_eq!(entry.level_current, Some(7));
        assert!(entry.stats_total.is_none());
        assert_eq!(entry.official_stats_total.unwrap().kills, Some(4.0));
    }
}
