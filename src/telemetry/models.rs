use serde::{Deserialize, Serialize};

use super::events::Location;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl From<Location> for Position2D {
    fn from(location: Location) -> Self {
        Self {
            x: location.x,
            y: location.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSample {
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    pub position: Position2D,
    pub timestamp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackSample {
    pub attacker_name: String,
    pub attacker_team_id: i64,
    pub attacker_position: Position2D,
    pub weapon_name: String,
    pub timestamp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillSample {
    pub killer_name: String,
    pub killer_team_id: i64,
    pub killer_position: Position2D,
    pub victim_name: String,
    pub victim_team_id: i64,
    pub victim_position: Position2D,
    pub weapon: String,
    pub distance: f64,
    pub timestamp: f64,
}

/// A play zone or red zone circle at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSample {
    pub position: Position2D,
    pub radius: f64,
    pub timestamp: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryProjection {
    pub player_positions: Vec<PositionSample>,
    pub player_attacks: Vec<AttackSample>,
    pub player_kills: Vec<KillSample>,
    pub play_zones: Vec<ZoneSample>,
    pub red_zones: Vec<ZoneSample>,
}

impl TelemetryProjection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.player_positions.is_empty()
            && self.player_attacks.is_empty()
            && self.player_kills.is_empty()
            && self.play_zones.is_empty()
            && self.red_zones.is_empty()
    }
}

/// Projection served to clients, tagged with the match it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryResponse {
    #[serde(flatten)]
    pub projection: TelemetryProjection,
    pub map: String,
    pub duration: u32,
}
