use std::collections::HashMap;

use super::models::{NormalizedMatch, NormalizedParticipant};
use crate::provider::{AssetEntity, IncludedEntity, ParticipantEntity, RawMatchDocument, RosterEntity};

const TELEMETRY_MARKER: &str = "telemetry";

/// Entities of a match document's `included` array, split by kind
#[derive(Debug, Default)]
struct MatchInclusions<'a> {
    participants: Vec<&'a ParticipantEntity>,
    rosters: Vec<&'a RosterEntity>,
    assets: Vec<&'a AssetEntity>,
}

impl<'a> MatchInclusions<'a> {
    fn partition(included: &'a [IncludedEntity]) -> Self {
        included
            .iter()
            .fold(Self::default(), |mut inclusions, entity| {
                match entity {
                    IncludedEntity::Participant(p) => inclusions.participants.push(p),
                    IncludedEntity::Roster(r) => inclusions.rosters.push(r),
                    IncludedEntity::Asset(a) => inclusions.assets.push(a),
                    IncludedEntity::Other => {}
                }
                inclusions
            })
    }

    /// Participant id -> owning roster, built once per document
    fn roster_index(&self) -> HashMap<&'a str, &'a RosterEntity> {
        let mut index = HashMap::new();
        for roster in self.rosters.iter().copied() {
            for member in &roster.relationships.participants.data {
                index.entry(member.id.as_str()).or_insert(roster);
            }
        }
        index
    }

    fn telemetry_url(&self) -> String {
        self.assets
            .iter()
            .filter_map(|asset| asset.attributes.url.as_deref())
            .find(|url| url.contains(TELEMETRY_MARKER))
            .unwrap_or_default()
            .to_string()
    }
}

/// Converts a raw provider match document into a `NormalizedMatch`.
///
/// Never fails: unknown or malformed inclusions are ignored, participants
/// without a roster get no team id, and a missing telemetry asset yields an
/// empty URL.
pub fn normalize_match(document: &RawMatchDocument) -> NormalizedMatch {
    let attributes = &document.data.attributes;
    let inclusions = MatchInclusions::partition(&document.included);
    let roster_of = inclusions.roster_index();
    let platform = attributes.shard_id.clone().unwrap_or_default();

    let participants: Vec<NormalizedParticipant> = inclusions
        .participants
        .iter()
        .map(|participant| {
            let stats = &participant.attributes.stats;
            NormalizedParticipant {
                id: participant.id.clone(),
                name: stats.name.clone().unwrap_or_default(),
                kills: stats.kills,
                damage: round_non_negative(stats.damage_dealt),
                assists: stats.assists,
                revives: stats.revives,
                rank: stats.win_place,
                team_id: roster_of
                    .get(participant.id.as_str())
                    .and_then(|roster| roster.attributes.stats.team_id),
                platform: platform.clone(),
                player_id: stats.player_id.clone().unwrap_or_default(),
            }
        })
        .collect();

    NormalizedMatch {
        id: document.data.id.clone(),
        map: attributes.map_name.clone().unwrap_or_default(),
        created_at: attributes.created_at.clone().unwrap_or_default(),
        duration: attributes.duration.map_or(0, |secs| secs.max(0.0).floor() as u32),
        game_mode: attributes.game_mode.clone().unwrap_or_default(),
        player_count: participants.len(),
        participants,
        telemetry_url: inclusions.telemetry_url(),
    }
}

fn round_non_negative(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
