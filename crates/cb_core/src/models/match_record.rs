//! Match header — one recorded 3v3 game.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final outcome of a recorded match, from the recording player's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    Win,
    Loss,
}

/// Header of a recorded match.
///
/// Read-only once accepted; an edit is a full re-submission of the new
/// payload, never an in-place patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Season label, e.g. "S7". Passed through to reports verbatim.
    pub season: String,
    /// Sequence number of the game within the season.
    pub game_no: u32,
    pub played_at: DateTime<Utc>,
    /// True when the opposing side was CPU-controlled. Relaxes the
    /// opponent-side cardinality and cross-consistency checks.
    #[serde(default)]
    pub cpu_opponent: bool,
    pub own_score: i32,
    pub opponent_score: i32,
    pub outcome: MatchOutcome,
    #[serde(default)]
    pub note: Option<String>,
}
