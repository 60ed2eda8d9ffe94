//! Core types for stored boxscore data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Sport leagues this service ingests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "NBA")]
    Nba,

    #[serde(rename = "MLB")]
    Mlb,
}

impl League {
    /// Every league the service knows about
    pub const ALL: [League; 2] = [League::Nba, League::Mlb];

    /// Canonical uppercase name, as stored and served
    pub fn as_str(&self) -> &'static str {
        match self {
            League::Nba => "NBA",
            League::Mlb => "MLB",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = UnknownLeague;

    // Route paths arrive in arbitrary case ("nba", "Mlb", ...)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NBA" => Ok(League::Nba),
            "MLB" => Ok(League::Mlb),
            _ => Err(UnknownLeague(s.to_string())),
        }
    }
}

/// Rejection for league names that are neither NBA nor MLB
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown league {0:?}, must be \"NBA\" or \"MLB\"")]
pub struct UnknownLeague(pub String);

/// One stored upstream document, at most one per league
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,

    pub league: League,

    /// When the payload was last written
    pub last_updated: DateTime<Utc>,

    /// Opaque upstream document, stored exactly as fetched
    pub payload: Value,
}

impl GameRecord {
    /// Build a fresh record for a league
    pub fn new(league: League, payload: Value, last_updated: DateTime<Utc>) -> Self {
        Self { id: Uuid::new_v4(), league, last_updated, payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_league_parses_any_case() {
        assert_eq!("nba".parse::<League>().unwrap(), League::Nba);
        assert_eq!("NBA".parse::<League>().unwrap(), League::Nba);
        assert_eq!("Mlb".parse::<League>().unwrap(), League::Mlb);
    }

    #[test]
    fn test_league_rejects_unknown_names() {
        let err = "NHL".parse::<League>().unwrap_err();
        assert_eq!(err, UnknownLeague("NHL".to_string()));
    }

    #[test]
    fn test_league_displays_uppercase() {
        assert_eq!(League::Nba.to_string(), "NBA");
        assert_eq!(League::Mlb.to_string(), "MLB");
    }

    #[test]
    fn test_league_serde_round_trip() {
        let json = serde_json::to_string(&League::Mlb).unwrap();
        assert_eq!(json, "\"MLB\"");
        assert_eq!(serde_json::from_str::<League>(&json).unwrap(), League::Mlb);
    }

    #[test]
    fn test_new_record_carries_payload_and_league() {
        let now = Utc::now();
        let record = GameRecord::new(League::Nba, json!({"status": "final"}), now);

        assert_eq!(record.league, League::Nba);
        assert_eq!(record.last_updated, now);
        assert_eq!(record.payload, json!({"status": "final"}));
    }
}
