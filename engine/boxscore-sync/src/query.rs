//! Read-path helpers for the boxscore API handlers
//!
//! The HTTP layer itself lives in front of this crate; these are the
//! pure pieces it needs: which stat fields may be requested per league,
//! slicing one stat out of a stored payload, and the all-games summary
//! array.

use boxscore_store::{GameRecord, League};
use serde_json::{Map, Value};

/// Stat fields valid for any league
const COMMON_STATS: &[&str] = &[
    "away_team",
    "home_team",
    "away_period_scores",
    "home_period_scores",
    "officials",
    "event_information",
];

/// NBA-only stat fields
const NBA_STATS: &[&str] = &["away_stats", "home_stats", "away_totals", "home_totals"];

/// MLB-only stat fields
const MLB_STATS: &[&str] = &[
    "away_errors",
    "home_errors",
    "away_batters",
    "home_batters",
    "away_pitchers",
    "home_pitchers",
    "away_fielding",
    "home_fielding",
    "away_batter_totals",
    "home_batter_totals",
];

/// Is `stat` a queryable field for this league?
pub fn is_valid_stat(stat: &str, league: League) -> bool {
    if COMMON_STATS.contains(&stat) {
        return true;
    }

    match league {
        League::Nba => NBA_STATS.contains(&stat),
        League::Mlb => MLB_STATS.contains(&stat),
    }
}

/// Is `stat` queryable regardless of league? Used by the all-games path.
pub fn is_common_stat(stat: &str) -> bool {
    COMMON_STATS.contains(&stat)
}

/// Extract one stat field from a stored payload
///
/// Scalar fields come back wrapped in a single-entry object so the
/// response body is always an object or array, never a bare primitive.
/// Returns None when the payload has no such field.
pub fn stat_slice(payload: &Value, stat: &str) -> Option<Value> {
    let value = payload.get(stat)?;

    match value {
        Value::Object(_) | Value::Array(_) => Some(value.clone()),
        scalar => {
            let mut wrapped = Map::new();
            wrapped.insert(stat.to_string(), scalar.clone());
            Some(Value::Object(wrapped))
        }
    }
}

/// Build the all-games response array
///
/// With a stat filter each entry is `{"<LEAGUE>": <field value>}`;
/// without one each entry is the full stored payload.
pub fn league_summaries(records: &[GameRecord], stat: Option<&str>) -> Vec<Value> {
    records
        .iter()
        .map(|record| match stat {
            Some(stat) => {
                let slice = record.payload.get(stat).cloned().unwrap_or(Value::Null);
                let mut entry = Map::new();
                entry.insert(record.league.to_string(), slice);
                Value::Object(entry)
            }
            None => record.payload.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_common_stats_valid_for_both_leagues() {
        for league in League::ALL {
            assert!(is_valid_stat("away_team", league));
            assert!(is_valid_stat("officials", league));
        }
    }

    #[test]
    fn test_league_specific_stats_do_not_cross() {
        assert!(is_valid_stat("away_totals", League::Nba));
        assert!(!is_valid_stat("away_totals", League::Mlb));

        assert!(is_valid_stat("home_pitchers", League::Mlb));
        assert!(!is_valid_stat("home_pitchers", League::Nba));
    }

    #[test]
    fn test_unknown_stat_is_rejected() {
        assert!(!is_valid_stat("coaching_staff", League::Nba));
        assert!(!is_common_stat("away_totals"));
        assert!(is_common_stat("home_team"));
    }

    #[test]
    fn test_stat_slice_returns_structured_values_as_is() {
        let payload = json!({
            "away_team": {"abbreviation": "BOS", "full_name": "Boston Celtics"},
            "officials": [{"first_name": "Pat"}],
        });

        assert_eq!(
            stat_slice(&payload, "away_team").unwrap(),
            json!({"abbreviation": "BOS", "full_name": "Boston Celtics"})
        );
        assert_eq!(
            stat_slice(&payload, "officials").unwrap(),
            json!([{"first_name": "Pat"}])
        );
    }

    #[test]
    fn test_stat_slice_wraps_scalars_in_an_object() {
        let payload = json!({"status": "completed", "attendance": 18624});

        assert_eq!(
            stat_slice(&payload, "status").unwrap(),
            json!({"status": "completed"})
        );
        assert_eq!(
            stat_slice(&payload, "attendance").unwrap(),
            json!({"attendance": 18624})
        );
    }

    #[test]
    fn test_stat_slice_misses_absent_fields() {
        assert!(stat_slice(&json!({"status": "final"}), "home_team").is_none());
    }

    fn sample_records() -> Vec<GameRecord> {
        vec![
            GameRecord::new(
                League::Nba,
                json!({"league": "NBA", "home_team": {"abbreviation": "DET"}}),
                Utc::now(),
            ),
            GameRecord::new(
                League::Mlb,
                json!({"league": "MLB", "home_team": {"abbreviation": "CHC"}}),
                Utc::now(),
            ),
        ]
    }

    #[test]
    fn test_league_summaries_without_filter_returns_full_payloads() {
        let records = sample_records();
        let summaries = league_summaries(&records, None);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0], records[0].payload);
        assert_eq!(summaries[1], records[1].payload);
    }

    #[test]
    fn test_league_summaries_with_filter_keys_by_league() {
        let summaries = league_summaries(&sample_records(), Some("home_team"));

        assert_eq!(summaries[0], json!({"NBA": {"abbreviation": "DET"}}));
        assert_eq!(summaries[1], json!({"MLB": {"abbreviation": "CHC"}}));
    }

    #[test]
    fn test_league_summaries_with_absent_field_yields_null_slice() {
        let summaries = league_summaries(&sample_records(), Some("officials"));

        assert_eq!(summaries[0], json!({"NBA": null}));
    }
}
