use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use super::events::{
    GameStateEvent, PlayerAttackEvent, PlayerKillEvent, PlayerPositionEvent, RedZoneEvent,
    TelemetryEvent,
};
use super::models::{AttackSample, KillSample, PositionSample, TelemetryProjection, ZoneSample};

const DEFAULT_RED_ZONE_RADIUS: f64 = 50.0;
const UNKNOWN_WEAPON: &str = "Unknown";

#[derive(Debug, Error, PartialEq)]
pub enum TelemetryError {
    #[error("invalid telemetry format")]
    InvalidFormat,
}

/// Projects a raw telemetry stream into per-kind sample lists
///
/// Events are decoded one at a time; anything that does not decode is
/// skipped without affecting its neighbours. Order within each list
/// follows the stream.
#[instrument(skip(stream))]
pub fn reconstruct(stream: Value) -> Result<TelemetryProjection, TelemetryError> {
    let Value::Array(events) = stream else {
        return Err(TelemetryError::InvalidFormat);
    };

    let total = events.len();
    let mut projection = TelemetryProjection::empty();
    let mut skipped = 0usize;

    for raw in events {
        match serde_json::from_value::<TelemetryEvent>(raw) {
            Ok(event) => projection.push(event),
            Err(_) => skipped += 1,
        }
    }

    debug!(
        total,
        skipped,
        positions = projection.player_positions.len(),
        kills = projection.player_kills.len(),
        "Telemetry reconstructed"
    );

    Ok(projection)
}

impl TelemetryProjection {
    fn push(&mut self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::PlayerPosition(e) => self.player_positions.push(e.into()),
            TelemetryEvent::PlayerAttack(e) => self.player_attacks.push(e.into()),
            TelemetryEvent::PlayerKill(e) => self.player_kills.push(e.into()),
            TelemetryEvent::GameState(e) => self.play_zones.push(e.into()),
            TelemetryEvent::RedZoneEnded(e) => self.red_zones.push(e.into()),
            TelemetryEvent::Other => {}
        }
    }
}

impl From<PlayerPositionEvent> for PositionSample {
    fn from(event: PlayerPositionEvent) -> Self {
        Self {
            player_name: event.character.name,
            team_id: event.character.team_id,
            position: event.character.location.into(),
            timestamp: event.elapsed_time,
        }
    }
}

impl From<PlayerAttackEvent> for AttackSample {
    fn from(event: PlayerAttackEvent) -> Self {
        Self {
            attacker_name: event.attacker.name,
            attacker_team_id: event.attacker.team_id,
            attacker_position: event.attacker.location.into(),
            weapon_name: event
                .weapon
                .and_then(|w| w.item_id)
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| UNKNOWN_WEAPON.to_string()),
            timestamp: event.elapsed_time,
        }
    }
}

impl From<PlayerKillEvent> for KillSample {
    fn from(event: PlayerKillEvent) -> Self {
        Self {
            killer_name: event.killer.name,
            killer_team_id: event.killer.team_id,
            killer_position: event.killer.location.into(),
            victim_name: event.victim.name,
            victim_team_id: event.victim.team_id,
            victim_position: event.victim.location.into(),
            weapon: event
                .damage_causer_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_WEAPON.to_string()),
            distance: event.distance.unwrap_or_default(),
            timestamp: event.elapsed_time,
        }
    }
}

impl From<GameStateEvent> for ZoneSample {
    fn from(event: GameStateEvent) -> Self {
        Self {
            position: event.game_state.safety_zone_position.into(),
            radius: event.game_state.safety_zone_radius.unwrap_or_default(),
            timestamp: event.elapsed_time,
        }
    }
}

impl From<RedZoneEvent> for ZoneSample {
    fn from(event: RedZoneEvent) -> Self {
        Self {
            position: event.zone_position.into(),
            radius: event
                .zone_radius
                .filter(|radius| *radius != 0.0)
                .unwrap_or(DEFAULT_RED_ZONE_RADIUS),
            timestamp: event.elapsed_time,
        }
    }
}
