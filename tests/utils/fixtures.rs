use serde_json::{json, Value};

// ============================================================================
// Provider Document Builders
// ============================================================================

pub fn players_document(player_id: &str, player_name: &str, match_ids: &[&str]) -> Value {
    let matches: Vec<Value> = match_ids
        .iter()
        .map(|id| json!({"type": "match", "id": id}))
        .collect();

    json!({"data": [{
        "type": "player",
        "id": player_id,
        "attributes": {"name": player_name, "shardId": "steam"},
        "relationships": {"matches": {"data": matches}}
    }]})
}

pub fn lifetime_document(modes: Value) -> Value {
    json!({"data": {"type": "playerSeason", "attributes": {"gameModeStats": modes}}})
}

struct Participant {
    id: String,
    name: String,
    player_id: String,
    kills: u32,
    damage: f64,
    win_place: u32,
    team_id: Option<i64>,
}

/// Builds a provider match document participant by participant
pub struct MatchBuilder {
    match_id: String,
    map_name: String,
    duration: f64,
    game_mode: String,
    participants: Vec<Participant>,
    telemetry_url: Option<String>,
    extra_included: Vec<Value>,
}

impl MatchBuilder {
    pub fn new(match_id: &str) -> Self {
        Self {
            match_id: match_id.to_string(),
            map_name: "Erangel_Main".to_string(),
            duration: 1800.0,
            game_mode: "squad-fpp".to_string(),
            participants: Vec::new(),
            telemetry_url: None,
            extra_included: Vec::new(),
        }
    }

    pub fn map(mut self, map_name: &str) -> Self {
        self.map_name = map_name.to_string();
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn game_mode(mut self, mode: &str) -> Self {
        self.game_mode = mode.to_string();
        self
    }

    /// Adds a participant; `team_id = None` leaves it outside every roster
    pub fn participant(
        mut self,
        name: &str,
        player_id: &str,
        kills: u32,
        damage: f64,
        win_place: u32,
        team_id: Option<i64>,
    ) -> Self {
        let id = format!("{}-participant-{}", self.match_id, self.participants.len());
        self.participants.push(Participant {
            id,
            name: name.to_string(),
            player_id: player_id.to_string(),
            kills,
            damage,
            win_place,
            team_id,
        });
        self
    }

    pub fn telemetry(mut self, url: &str) -> Self {
        self.telemetry_url = Some(url.to_string());
        self
    }

    /// Appends a raw `included` entry, e.g. one the normalizer should ignore
    pub fn raw_included(mut self, entry: Value) -> Self {
        self.extra_included.push(entry);
        self
    }

    pub fn build(self) -> Value {
        let mut included: Vec<Value> = Vec::new();

        for p in &self.participants {
            included.push(json!({
                "type": "participant",
                "id": p.id,
                "attributes": {"stats": {
                    "name": p.name,
                    "playerId": p.player_id,
                    "kills": p.kills,
                    "damageDealt": p.damage,
                    "assists": 0,
                    "revives": 1,
                    "winPlace": p.win_place
                }}
            }));
        }

        let mut team_ids: Vec<i64> = self.participants.iter().filter_map(|p| p.team_id).collect();
        team_ids.sort_unstable();
        team_ids.dedup();

        for team_id in team_ids {
            let members: Vec<Value> = self
                .participants
                .iter()
                .filter(|p| p.team_id == Some(team_id))
                .map(|p| json!({"type": "participant", "id": p.id}))
                .collect();
            included.push(json!({
                "type": "roster",
                "id": format!("{}-roster-{}", self.match_id, team_id),
                "attributes": {"stats": {"rank": 1, "teamId": team_id}},
                "relationships": {"participants": {"data": members}}
            }));
        }

        if let Some(url) = &self.telemetry_url {
            included.push(json!({
                "type": "asset",
                "id": format!("{}-asset", self.match_id),
                "attributes": {"name": "telemetry", "URL": url}
            }));
        }

        included.extend(self.extra_included);

        json!({
            "data": {
                "type": "match",
                "id": self.match_id,
                "attributes": {
                    "mapName": self.map_name,
                    "duration": self.duration,
                    "createdAt": "2024-06-01T12:00:00Z",
                    "gameMode": self.game_mode,
                    "shardId": "steam"
                }
            },
            "included": included
        })
    }
}

// ============================================================================
// Telemetry Builders
// ============================================================================

pub fn location(x: f64, y: f64) -> Value {
    json!({"x": x, "y": y, "z": 0.0})
}

pub fn position_event(name: &str, team_id: i64, x: f64, y: f64, elapsed: f64) -> Value {
    json!({
        "_T": "LogPlayerPosition",
        "character": {"name": name, "teamId": team_id, "location": location(x, y)},
        "elapsedTime": elapsed
    })
}

pub fn kill_event(killer: &str, victim: &str, weapon: &str, elapsed: f64) -> Value {
    json!({
        "_T": "LogPlayerKillV2",
        "killer": {"name": killer, "teamId": 1, "location": location(10.0, 10.0)},
        "victim": {"name": victim, "teamId": 2, "location": location(20.0, 20.0)},
        "damageCauserName": weapon,
        "distance": 1234.5,
        "elapsedTime": elapsed
    })
}

pub fn zone_event(x: f64, y: f64, radius: f64, elapsed: f64) -> Value {
    json!({
        "_T": "LogGameStatePeriodic",
        "gameState": {"safetyZonePosition": location(x, y), "safetyZoneRadius": radius},
        "elapsedTime": elapsed
    })
}
