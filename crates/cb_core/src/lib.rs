//! # cb_core - Match Record Consistency & Stats Reporting Core
//!
//! This library is the computational core of a personal 3v3 hoops
//! record-keeping backend. It owns the two subsystems with real
//! engineering content:
//!
//! - write-time consistency validation of a match submission (header,
//!   per-side team totals, per-player lines), and
//! - read-time aggregation of player lines into ranked, tie-broken
//!   leaderboards across the metric catalog.
//!
//! Everything is a pure, synchronous function of caller-owned input:
//! no persistence, no caching, no shared state. Identical input always
//! produces identical output, so independent calls may run on any
//! number of threads without coordination.

pub mod api;
pub mod error;
pub mod models;
pub mod stats;
pub mod validation;

// Re-export the main API functions
pub use api::{build_report_json, validate_match_json};
pub use error::{CoreError, Result};

// Re-export model types
pub use models::{MatchOutcome, MatchRecord, PlayerLine, Side, TeamTotals};

// Re-export stats types
pub use stats::{
    BoardKind, BoardRow, Dimension, GroupTotals, Leaderboard, LeaderboardBuilder, Metric,
    MetricKind, MetricSpec, StatsAggregator, StatsReport, CATALOG, UNKNOWN_GROUP,
};

// Re-export validation types
pub use validation::{MatchValidator, ValidationError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> serde_json::Value {
        json!({
            "schema_version": 1,
            "match": {
                "season": "S7",
                "game_no": 1,
                "played_at": "2024-03-09T21:30:00Z",
                "cpu_opponent": true,
                "own_score": 12,
                "opponent_score": 9,
                "outcome": "WIN"
            },
            "team_totals": [
                {
                    "side": "OWN", "score": 12,
                    "fg_attempts": 10, "fg_made": 5,
                    "three_attempts": 2, "three_made": 1,
                    "assists": 4, "rebounds": 7, "off_rebounds": 3, "def_rebounds": 4,
                    "steals": 2, "blocks": 1, "dunks": 1,
                    "paint_points": 6, "second_chance_points": 2,
                    "points_off_turnovers": 3, "max_lead": 6
                },
                {
                    "side": "OPPONENT", "score": 9,
                    "fg_attempts": 11, "fg_made": 4,
                    "three_attempts": 3, "three_made": 1,
                    "assists": 3, "rebounds": 6, "off_rebounds": 2, "def_rebounds": 4,
                    "steals": 1, "blocks": 0, "dunks": 0,
                    "paint_points": 4, "second_chance_points": 2,
                    "points_off_turnovers": 2, "max_lead": 2
                }
            ],
            "player_lines": [
                {"side": "OWN", "subject": "Rex", "operator": "kim", "score": 6,
                 "fg_attempts": 5, "fg_made": 3, "three_attempts": 1, "three_made": 0,
                 "assists": 2, "rebounds": 3, "steals": 1, "blocks": 1, "dunks": 1, "mvp": true},
                {"side": "OWN", "subject": "Ivy", "operator": "lee", "score": 4,
                 "fg_attempts": 3, "fg_made": 1, "three_attempts": 1, "three_made": 1,
                 "assists": 1, "rebounds": 2, "steals": 1},
                {"side": "OWN", "subject": "Moss", "operator": "park", "score": 2,
                 "fg_attempts": 2, "fg_made": 1,
                 "assists": 1, "rebounds": 2}
            ]
        })
    }

    #[test]
    fn test_full_submission_round_trip() {
        let response = validate_match_json(&full_request().to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["accepted"], true);
    }

    #[test]
    fn test_report_determinism() {
        let request = json!({
            "schema_version": 1,
            "season": "S7",
            "dimension": "PLAYER",
            "player_lines": full_request()["player_lines"].clone(),
        })
        .to_string();

        let first = build_report_json(&request).unwrap();
        let second = build_report_json(&request).unwrap();
        assert_eq!(first, second, "identical input must produce identical output");
    }
}
