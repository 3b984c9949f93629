//! Per-side team box score for a single match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two parties in a recorded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    #[default]
    Own,
    Opponent,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opponent(&self) -> Self {
        match self {
            Side::Own => Side::Opponent,
            Side::Opponent => Side::Own,
        }
    }

    pub const BOTH: [Side; 2] = [Side::Own, Side::Opponent];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Own => write!(f, "own"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Aggregate box score for one side of one match.
///
/// Counting fields are signed so that malformed submissions are
/// representable; the validator rejects negatives at the write boundary.
/// Missing fields deserialize to zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamTotals {
    pub side: Side,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub fg_attempts: i32,
    #[serde(default)]
    pub fg_made: i32,
    #[serde(default)]
    pub three_attempts: i32,
    #[serde(default)]
    pub three_made: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub rebounds: i32,
    #[serde(default)]
    pub off_rebounds: i32,
    #[serde(default)]
    pub def_rebounds: i32,
    #[serde(default)]
    pub steals: i32,
    #[serde(default)]
    pub blocks: i32,
    #[serde(default)]
    pub dunks: i32,
    #[serde(default)]
    pub paint_points: i32,
    #[serde(default)]
    pub second_chance_points: i32,
    #[serde(default)]
    pub points_off_turnovers: i32,
    #[serde(default)]
    pub max_lead: i32,
}

impl TeamTotals {
    /// Every counting field with its name, for uniform range checks.
    pub fn counting_fields(&self) -> [(&'static str, i32); 16] {
        [
            ("score", self.score),
            ("field goals attempted", self.fg_attempts),
            ("field goals made", self.fg_made),
            ("three pointers attempted", self.three_attempts),
            ("three pointers made", self.three_made),
            ("assists", self.assists),
            ("rebounds", self.rebounds),
            ("offensive rebounds", self.off_rebounds),
            ("defensive rebounds", self.def_rebounds),
            ("steals", self.steals),
            ("blocks", self.blocks),
            ("dunks", self.dunks),
            ("points in the paint", self.paint_points),
            ("second chance points", self.second_chance_points),
            ("points off turnovers", self.points_off_turnovers),
            ("max lead", self.max_lead),
        ]
    }
}
