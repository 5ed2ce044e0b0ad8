use super::aggregator::kd_ratio;
use super::models::{MapSummary, MatchSample};

/// Display name for a provider map code; unknown codes pass through
pub fn map_display_name(code: &str) -> &str {
    match code {
        "Baltic_Main" => "Erangel (Remastered)",
        "Chimera_Main" => "Paramo",
        "Desert_Main" => "Miramar",
        "DihorOtok_Main" => "Vikendi",
        "Erangel_Main" => "Erangel",
        "Heaven_Main" => "Haven",
        "Kiki_Main" => "Deston",
        "Range_Main" => "Camp Jackal",
        "Savage_Main" => "Sanhok",
        "Summerland_Main" => "Karakin",
        "Tiger_Main" => "Taego",
        "Neon_Main" => "Rondo",
        other => other,
    }
}

#[derive(Default)]
struct MapTally {
    count: u32,
    kills: u32,
    deaths: u32,
    wins: u32,
    placement_sum: u32,
}

/// Per-map breakdown of the sampled recent matches, most played first
pub fn map_breakdown(samples: &[MatchSample]) -> Vec<MapSummary> {
    // First-seen order, so the stable sort keeps it for equal counts
    let mut tallies: Vec<(&str, MapTally)> = Vec::new();

    for sample in samples {
        let name = map_display_name(&sample.map);
        let index = match tallies.iter().position(|(existing, _)| *existing == name) {
            Some(index) => index,
            None => {
                tallies.push((name, MapTally::default()));
                tallies.len() - 1
            }
        };

        let tally = &mut tallies[index].1;
        let won = sample.placement == 1;
        tally.count += 1;
        tally.kills += sample.kills;
        tally.deaths += u32::from(!won);
        tally.wins += u32::from(won);
        tally.placement_sum += sample.placement;
    }

    let sample_size = samples.len() as f64;
    let mut maps: Vec<MapSummary> = tallies
        .into_iter()
        .map(|(name, tally)| MapSummary {
            name: name.to_string(),
            count: tally.count,
            percentage: format!("{:.1}%", f64::from(tally.count) / sample_size * 100.0),
            matches: tally.count,
            kd: if tally.deaths > 0 {
                kd_ratio(tally.kills, tally.deaths)
            } else {
                tally.kills.to_string()
            },
            wins: tally.wins,
            avg_rank: format!("{:.2}", f64::from(tally.placement_sum) / f64::from(tally.count)),
        })
        .collect();

    maps.sort_by(|a, b| b.count.cmp(&a.count));
    maps
}
