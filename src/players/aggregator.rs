use crate::provider::{GameModeStats, LifetimeStatsDocument, SurvivalMasteryDocument, WeaponMasteryDocument};

use super::map_breakdown::map_breakdown;
use super::mastery::{survival_details, top_weapons};
use super::models::{MatchSample, PlayerStatsAggregate};

const DEFAULT_GAME_MODE: &str = "Squad FPP";
const LIFETIME_SEASON: &str = "All Time";

/// Lifetime counters summed across every game mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedStats {
    pub kills: u32,
    pub losses: u32,
    pub wins: u32,
    pub damage_dealt: f64,
    pub headshot_kills: u32,
    pub longest_kill: f64,
    pub total_games: u32,
    pub top10s: u32,
    /// Mode with the most rounds played; earlier keys win ties
    pub most_played: Option<String>,
    most_played_rounds: u32,
}

impl CombinedStats {
    fn absorb(self, mode: &str, stats: &GameModeStats) -> Self {
        let takes_lead = stats.rounds_played > self.most_played_rounds;

        Self {
            kills: self.kills + stats.kills,
            losses: self.losses + stats.losses,
            wins: self.wins + stats.wins,
            damage_dealt: self.damage_dealt + stats.damage_dealt,
            headshot_kills: self.headshot_kills + stats.headshot_kills,
            longest_kill: self.longest_kill.max(stats.longest_kill),
            total_games: self.total_games + stats.rounds_played,
            top10s: self.top10s + stats.top10s,
            most_played: if takes_lead {
                Some(mode.to_string())
            } else {
                self.most_played
            },
            most_played_rounds: self.most_played_rounds.max(stats.rounds_played),
        }
    }
}

/// Folds per-mode stats into one record, visiting modes in key order
pub fn combine_game_modes<'a, I>(modes: I) -> CombinedStats
where
    I: IntoIterator<Item = (&'a String, &'a GameModeStats)>,
{
    modes
        .into_iter()
        .fold(CombinedStats::default(), |acc, (mode, stats)| acc.absorb(mode, stats))
}

/// `numerator / denominator` with two decimals
///
/// A zero denominator counts as one, so a player with kills and no deaths
/// reports the kill count.
pub fn kd_ratio(kills: u32, deaths: u32) -> String {
    format!("{:.2}", f64::from(kills) / f64::from(deaths.max(1)))
}

/// `part / whole * 100` with one decimal and a `%` suffix; `"0%"` for an empty whole
pub fn percentage(part: u32, whole: u32) -> String {
    if whole == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", f64::from(part) / f64::from(whole) * 100.0)
}

/// Display label for a provider mode token, e.g. `squad-fpp` -> `Squad FPP`
pub fn game_mode_label(mode: Option<&str>) -> String {
    match mode.filter(|m| !m.is_empty()) {
        Some(mode) => mode
            .replacen("solo", "Solo", 1)
            .replacen("duo", "Duo", 1)
            .replacen("squad", "Squad", 1)
            .replacen("-fpp", " FPP", 1)
            .replacen("fpp", " FPP", 1),
        None => DEFAULT_GAME_MODE.to_string(),
    }
}

/// Builds the full stats aggregate from lifetime counters and optional enrichment
pub fn aggregate(
    lifetime: &LifetimeStatsDocument,
    weapon_mastery: Option<&WeaponMasteryDocument>,
    survival_mastery: Option<&SurvivalMasteryDocument>,
    samples: &[MatchSample],
) -> PlayerStatsAggregate {
    let combined = combine_game_modes(&lifetime.data.attributes.game_mode_stats);

    let (kd, win_rate, top10_rate, avg_damage) = if combined.total_games > 0 {
        (
            kd_ratio(combined.kills, combined.total_games.saturating_sub(combined.wins)),
            percentage(combined.wins, combined.total_games),
            percentage(combined.top10s, combined.total_games),
            (combined.damage_dealt / f64::from(combined.total_games)).round() as u32,
        )
    } else {
        ("0".to_string(), "0%".to_string(), "0%".to_string(), 0)
    };

    let (level, last_active) = survival_mastery.map(survival_details).unwrap_or_default();

    PlayerStatsAggregate {
        kills: combined.kills,
        wins: combined.wins,
        losses: combined.losses,
        total_matches: combined.total_games,
        damage_dealt: combined.damage_dealt,
        headshot_kills: combined.headshot_kills,
        longest_kill: combined.longest_kill,
        top10s: combined.top10s,
        kd,
        win_rate,
        top10_rate,
        avg_damage,
        headshot_rate: percentage(combined.headshot_kills, combined.kills),
        weapons: weapon_mastery
            .map(|doc| top_weapons(doc, combined.kills))
            .unwrap_or_default(),
        maps: map_breakdown(samples),
        level,
        last_active,
        season: LIFETIME_SEASON.to_string(),
        game_mode: game_mode_label(combined.most_played.as_deref()),
    }
}
