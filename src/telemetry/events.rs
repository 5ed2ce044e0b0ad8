use serde::Deserialize;

/// One entry of a match telemetry stream, discriminated by `_T`
///
/// Required fields are plain (non-`Option`) so an event missing them fails
/// to decode and is skipped as a whole.
#[derive(Debug, Deserialize)]
#[serde(tag = "_T")]
pub enum TelemetryEvent {
    #[serde(rename = "LogPlayerPosition")]
    PlayerPosition(PlayerPositionEvent),

    #[serde(rename = "LogPlayerAttack")]
    PlayerAttack(PlayerAttackEvent),

    #[serde(rename = "LogPlayerKillV2", alias = "LogPlayerKill")]
    PlayerKill(PlayerKillEvent),

    #[serde(rename = "LogGameStatePeriodic", alias = "LogPhaseChange")]
    GameState(GameStateEvent),

    #[serde(rename = "LogRedZoneEnded")]
    RedZoneEnded(RedZoneEvent),

    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Character block with only a name and position guaranteed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    pub location: Location,
}

/// Character block that must also carry a team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamedCharacter {
    pub name: String,
    pub team_id: i64,
    pub location: Location,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPositionEvent {
    pub character: Character,
    #[serde(default)]
    pub elapsed_time: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    #[serde(default)]
    pub item_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttackEvent {
    pub attacker: TeamedCharacter,
    #[serde(default)]
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub elapsed_time: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerKillEvent {
    pub killer: TeamedCharacter,
    pub victim: TeamedCharacter,
    #[serde(default)]
    pub damage_causer_name: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub elapsed_time: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub safety_zone_position: Location,
    #[serde(default)]
    pub safety_zone_radius: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateEvent {
    pub game_state: GameState,
    #[serde(default)]
    pub elapsed_time: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedZoneEvent {
    pub zone_position: Location,
    #[serde(default)]
    pub zone_radius: Option<f64>,
    #[serde(default)]
    pub elapsed_time: f64,
}
