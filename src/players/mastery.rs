use chrono::{DateTime, Utc};

use super::models::WeaponSummary;
use crate::provider::{SurvivalMasteryDocument, WeaponMasteryDocument, WeaponStatBucket};

const WEAPON_ID_PREFIX: &str = "Item_Weapon_";
const TOP_WEAPONS: usize = 5;

fn bucket_sum(buckets: &[Option<&WeaponStatBucket>], field: fn(&WeaponStatBucket) -> Option<f64>) -> f64 {
    buckets
        .iter()
        .flatten()
        .filter_map(|bucket| field(bucket))
        .sum()
}

fn bucket_max(buckets: &[Option<&WeaponStatBucket>], field: fn(&WeaponStatBucket) -> Option<f64>) -> f64 {
    buckets
        .iter()
        .flatten()
        .filter_map(|bucket| field(bucket))
        .fold(0.0, f64::max)
}

/// Top weapons by kills across all stat buckets
pub fn top_weapons(doc: &WeaponMasteryDocument, lifetime_kills: u32) -> Vec<WeaponSummary> {
    let Some(summaries) = doc.summaries() else {
        return Vec::new();
    };

    let mut weapons: Vec<WeaponSummary> = summaries
        .iter()
        .map(|(weapon_id, entry)| {
            let buckets = entry.buckets();
            let kills = bucket_sum(&buckets, |b| b.kills) as u32;
            let usage = if lifetime_kills > 0 {
                (f64::from(kills) / f64::from(lifetime_kills) * 100.0).round() as u32
            } else {
                0
            };

            WeaponSummary {
                id: weapon_id.clone(),
                name: weapon_id.replacen(WEAPON_ID_PREFIX, "", 1),
                xp: entry.xp_total.unwrap_or_default(),
                level_current: entry.level_current.unwrap_or_default(),
                kills,
                most_defeats_in_a_game: bucket_max(&buckets, |b| b.most_defeats_in_a_game) as u32,
                damage_player: bucket_sum(&buckets, |b| b.damage_player),
                headshots: bucket_sum(&buckets, |b| b.head_shots) as u32,
                groggies: bucket_sum(&buckets, |b| b.groggies) as u32,
                usage,
            }
        })
        .collect();

    weapons.sort_by(|a, b| b.kills.cmp(&a.kills));
    weapons.truncate(TOP_WEAPONS);
    weapons
}

/// `(level, last_active)` from survival mastery; blanks where unknown
pub fn survival_details(doc: &SurvivalMasteryDocument) -> (String, String) {
    let Some(attributes) = doc.attributes() else {
        return (String::new(), String::new());
    };

    let level = attributes
        .level
        .filter(|level| *level > 0)
        .map(|level| level.to_string())
        .unwrap_or_default();

    let last_active = attributes
        .last_match_date
        .as_deref()
        .and_then(|raw| raw.parse::<DateTime<Utc>>().ok())
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default();

    (level, last_active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weapon_doc(summaries: serde_json::Value) -> WeaponMasteryDocument {
        serde_json::from_value(json!({"data": {"attributes": {"weaponSummaries": summaries}}})).unwrap()
    }

    #[test]
    fn official_only_bucket_counts_as_if_others_were_zero() {
        let doc = weapon_doc(json!({
            "Item_Weapon_Kar98k_C": {
                "XPTotal": 1200.0,
                "LevelCurrent": 7,
                "OfficialStatsTotal": {"Kills": 12, "DamagePlayer": 1500.5, "HeadShots": 6, "Groggies": 3, "MostDefeatsInAGame": 4}
            }
        }));

        let weapons = top_weapons(&doc, 48);

        assert_eq!(weapons.len(), 1);
        let kar = &weapons[0];
        assert_eq!(kar.name, "Kar98k_C");
        assert_eq!(kar.kills, 12);
        assert_eq!(kar.damage_player, 1500.5);
        assert_eq!(kar.headshots, 6);
        assert_eq!(kar.groggies, 3);
        assert_eq!(kar.most_defeats_in_a_game, 4);
        assert_eq!(kar.level_current, 7);
        assert_eq!(kar.usage, 25);
    }

    #[test]
    fn buckets_are_summed_and_top_five_kept() {
        let mut summaries = serde_json::Map::new();
        for (index, kills) in [3, 40, 7, 1, 22, 15].iter().enumerate() {
            summaries.insert(
                format!("Item_Weapon_W{}_C", index),
                json!({
                    "StatsTotal": {"Kills": kills, "MostDefeatsInAGame": 2},
                    "CompetitiveStatsTotal": {"Kills": 1, "MostDefeatsInAGame": 5}
                }),
            );
        }

        let weapons = top_weapons(&weapon_doc(summaries.into()), 0);
        let kills: Vec<u32> = weapons.iter().map(|w| w.kills).collect();

        assert_eq!(kills, vec![41, 23, 16, 8, 4]);
        assert!(weapons.iter().all(|w| w.most_defeats_in_a_game == 5));
        assert!(weapons.iter().all(|w| w.usage == 0));
    }

    #[test]
    fn missing_summaries_give_no_weapons() {
        let doc: WeaponMasteryDocument = serde_json::from_value(json!({"data": {}})).unwrap();
        assert!(top_weapons(&doc, 10).is_empty());
    }

    #[test]
    fn survival_date_is_rendered_month_first() {
        let doc: SurvivalMasteryDocument = serde_json::from_value(json!({
            "data": {"attributes": {"level": 42, "lastMatchDate": "2024-03-05T18:22:10Z"}}
        }))
        .unwrap();

        assert_eq!(
            survival_details(&doc),
            ("42".to_string(), "3/5/2024".to_string())
        );
    }

    #[test]
    fn unparseable_survival_date_is_blank() {
        let doc: SurvivalMasteryDocument = serde_json::from_value(json!({
            "data": {"attributes": {"level": 3, "lastMatchDate": "yesterday"}}
        }))
        .unwrap();

        assert_eq!(survival_details(&doc), ("3".to_string(), String::new()));
    }
}
