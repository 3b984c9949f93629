//! Static catalog of reportable metrics.
//!
//! Each entry maps a metric identifier to its display label, its value
//! extractors over [`GroupTotals`], and per-dimension default-visibility
//! hints. The hints are consumed by presentation layers only; the core
//! never enforces them. Catalog order is the order boards appear in a
//! report.

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::accumulator::GroupTotals;

/// Identifier of a reportable metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    Appearances,
    Score,
    Rebound,
    Assist,
    Steal,
    Block,
    FgAttempt,
    FgMade,
    FgPct,
    ThreeAttempt,
    ThreeMade,
    ThreePct,
    Mvp,
    Svp,
    Turnover,
}

/// How a metric reads its value out of a group's totals.
#[derive(Debug, Clone, Copy)]
pub enum MetricKind {
    /// A simple counting metric.
    Count { total: fn(&GroupTotals) -> i64 },
    /// A made/attempted pair ranked by hit-rate.
    Rate {
        made: fn(&GroupTotals) -> i64,
        attempted: fn(&GroupTotals) -> i64,
    },
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub metric: Metric,
    pub label: &'static str,
    pub kind: MetricKind,
    /// Shown by default in player-dimension reports.
    pub player_default: bool,
    /// Shown by default in user-dimension reports.
    pub user_default: bool,
}

fn appearances(g: &GroupTotals) -> i64 {
    i64::from(g.appearances)
}
fn score(g: &GroupTotals) -> i64 {
    g.score
}
fn rebounds(g: &GroupTotals) -> i64 {
    g.rebounds
}
fn assists(g: &GroupTotals) -> i64 {
    g.assists
}
fn steals(g: &GroupTotals) -> i64 {
    g.steals
}
fn blocks(g: &GroupTotals) -> i64 {
    g.blocks
}
fn turnovers(g: &GroupTotals) -> i64 {
    g.turnovers
}
fn fg_attempts(g: &GroupTotals) -> i64 {
    g.fg_attempts
}
fn fg_made(g: &GroupTotals) -> i64 {
    g.fg_made
}
fn three_attempts(g: &GroupTotals) -> i64 {
    g.three_attempts
}
fn three_made(g: &GroupTotals) -> i64 {
    g.three_made
}
fn mvp_awards(g: &GroupTotals) -> i64 {
    g.mvp_awards
}
fn svp_awards(g: &GroupTotals) -> i64 {
    g.svp_awards
}

/// The full catalog, in report order.
pub const CATALOG: &[MetricSpec] = &[
    MetricSpec {
        metric: Metric::Appearances,
        label: "Games Played",
        kind: MetricKind::Count { total: appearances },
        player_default: true,
        user_default: false,
    },
    MetricSpec {
        metric: Metric::Score,
        label: "Points",
        kind: MetricKind::Count { total: score },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::Rebound,
        label: "Rebounds",
        kind: MetricKind::Count { total: rebounds },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::Assist,
        label: "Assists",
        kind: MetricKind::Count { total: assists },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::Steal,
        label: "Steals",
        kind: MetricKind::Count { total: steals },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::Block,
        label: "Blocks",
        kind: MetricKind::Count { total: blocks },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::FgAttempt,
        label: "Field Goals Attempted",
        kind: MetricKind::Count { total: fg_attempts },
        player_default: false,
        user_default: false,
    },
    MetricSpec {
        metric: Metric::FgMade,
        label: "Field Goals Made",
        kind: MetricKind::Count { total: fg_made },
        player_default: false,
        user_default: false,
    },
    MetricSpec {
        metric: Metric::FgPct,
        label: "Field Goal %",
        kind: MetricKind::Rate { made: fg_made, attempted: fg_attempts },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::ThreeAttempt,
        label: "Three Pointers Attempted",
        kind: MetricKind::Count { total: three_attempts },
        player_default: false,
        user_default: false,
    },
    MetricSpec {
        metric: Metric::ThreeMade,
        label: "Three Pointers Made",
        kind: MetricKind::Count { total: three_made },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::ThreePct,
        label: "Three Point %",
        kind: MetricKind::Rate { made: three_made, attempted: three_attempts },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::Mvp,
        label: "MVP Awards",
        kind: MetricKind::Count { total: mvp_awards },
        player_default: true,
        user_default: true,
    },
    MetricSpec {
        metric: Metric::Svp,
        label: "SVP Awards",
        kind: MetricKind::Count { total: svp_awards },
        player_default: false,
        user_default: false,
    },
    MetricSpec {
        metric: Metric::Turnover,
        label: "Turnovers",
        kind: MetricKind::Count { total: turnovers },
        player_default: false,
        user_default: true,
    },
];

static INDEX: Lazy<HashMap<Metric, &'static MetricSpec>> =
    Lazy::new(|| CATALOG.iter().map(|spec| (spec.metric, spec)).collect());

impl Metric {
    /// Catalog entry for this metric. Every variant has one; a test
    /// sweeps the enum to keep it that way.
    pub fn spec(self) -> &'static MetricSpec {
        INDEX[&self]
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_metric_has_exactly_one_catalog_entry() {
        for metric in Metric::iter() {
            let entries = CATALOG.iter().filter(|s| s.metric == metric).count();
            assert_eq!(entries, 1, "metric {:?} must appear exactly once", metric);
            assert!(!metric.label().is_empty());
        }
        assert_eq!(CATALOG.len(), Metric::iter().count());
    }

    #[test]
    fn test_appearances_hidden_for_user_dimension() {
        let spec = Metric::Appearances.spec();
        assert!(spec.player_default);
        assert!(!spec.user_default);
    }

    #[test]
    fn test_rate_metrics_extract_their_pair() {
        let totals = GroupTotals { fg_made: 6, fg_attempts: 12, ..Default::default() };
        match Metric::FgPct.spec().kind {
            MetricKind::Rate { made, attempted } => {
                assert_eq!(made(&totals), 6);
                assert_eq!(attempted(&totals), 12);
            }
            MetricKind::Count { .. } => panic!("FG_PCT must be a rate metric"),
        }
    }

    #[test]
    fn test_wire_names_are_screaming_snake_case() {
        let json = serde_json::to_string(&Metric::ThreePct).unwrap();
        assert_eq!(json, r#""THREE_PCT""#);
        let json = serde_json::to_string(&Metric::FgAttempt).unwrap();
        assert_eq!(json, r#""FG_ATTEMPT""#);
    }
}
