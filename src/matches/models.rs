use serde::{Deserialize, Serialize};

/// Flattened match record served to clients and cached by match id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMatch {
    pub id: String,
    pub map: String,
    pub created_at: String,
    /// Seconds
    pub duration: u32,
    pub game_mode: String,
    pub player_count: usize,
    pub participants: Vec<NormalizedParticipant>,
    /// Empty when the match carries no telemetry asset
    pub telemetry_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedParticipant {
    pub id: String,
    pub name: String,
    pub kills: u32,
    pub damage: u32,
    pub assists: u32,
    pub revives: u32,
    /// Final placement, 1 is the winner
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    pub platform: String,
    pub player_id: String,
}

impl NormalizedMatch {
    pub fn participant_by_player_id(&self, player_id: &str) -> Option<&NormalizedParticipant> {
        self.participants.iter().find(|p| p.player_id == player_id)
    }

    pub fn participant_by_name(&self, player_name: &str) -> Option<&NormalizedParticipant> {
        self.participants
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(player_name))
    }
}

/// One row of a player's recent match list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchSummary {
    pub id: String,
    pub map: String,
    pub game_mode: String,
    pub created_at: String,
    pub placement: u32,
    pub kills: u32,
    pub damage: u32,
    pub duration: u32,
    pub assists: u32,
    pub revives: u32,
}

impl PlayerMatchSummary {
    pub fn new(normalized: &NormalizedMatch, participant: &NormalizedParticipant) -> Self {
        Self {
            id: normalized.id.clone(),
            map: normalized.map.clone(),
            game_mode: normalized.game_mode.clone(),
            created_at: normalized.created_at.clone(),
            placement: participant.rank,
            kills: participant.kills,
            damage: participant.damage,
            duration: normalized.duration,
            assists: participant.assists,
            revives: participant.revives,
        }
    }
}
