//! Read-path statistics: aggregation and leaderboard reports.
//!
//! The aggregator folds a caller-supplied batch of player lines into
//! per-group totals; the builder turns those totals into ranked boards,
//! one per catalog metric and report shape. Everything is a pure
//! function of its inputs.

pub mod accumulator;
pub mod catalog;
pub mod leaderboard;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use accumulator::{GroupTotals, StatsAggregator, UNKNOWN_GROUP};
pub use catalog::{Metric, MetricKind, MetricSpec, CATALOG};
pub use leaderboard::{BoardKind, BoardRow, Leaderboard, LeaderboardBuilder, StatsReport};

/// Grouping dimension for reports: by played character or by the human
/// who controlled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Player,
    User,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Player => write!(f, "player"),
            Dimension::User => write!(f, "user"),
        }
    }
}
