//! Ranked, tie-broken leaderboards over aggregated group totals.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::accumulator::GroupTotals;
use super::catalog::{Metric, MetricKind, MetricSpec, CATALOG};
use super::Dimension;

/// Report shape of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    /// Raw group totals.
    Total,
    /// Per-appearance averages, half-up at one decimal.
    PerGame,
    /// Hit-rate over raw made/attempted totals.
    RateTotal,
    /// Hit-rate displaying per-appearance made/attempted averages.
    RatePerGame,
}

/// One ranked row. `made`/`attempted` are present on rate boards only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoardRow {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub made: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attempted: Option<f64>,
}

/// One metric's ranked board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Leaderboard {
    pub metric: Metric,
    pub label: String,
    pub kind: BoardKind,
    pub rows: Vec<BoardRow>,
}

/// The full report for one season slice and grouping dimension. Season
/// and dimension are passed through from the request verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatsReport {
    pub season: String,
    pub dimension: Dimension,
    pub boards: Vec<Leaderboard>,
}

/// Turns aggregated group totals into one board per catalog metric and
/// applicable report shape, in catalog order.
pub struct LeaderboardBuilder;

impl LeaderboardBuilder {
    pub fn build(
        season: &str,
        dimension: Dimension,
        groups: &HashMap<String, GroupTotals>,
    ) -> StatsReport {
        let mut boards = Vec::new();
        for spec in CATALOG {
            match spec.kind {
                MetricKind::Count { total } => {
                    if spec.metric == Metric::Appearances {
                        // An appearance count per user is undefined; the
                        // board only exists in the player dimension, and
                        // only as a raw total.
                        if dimension == Dimension::Player {
                            boards.push(total_board(spec, groups, total));
                        }
                        continue;
                    }
                    boards.push(total_board(spec, groups, total));
                    boards.push(per_game_board(spec, groups, total));
                }
                MetricKind::Rate { made, attempted } => {
                    boards.push(rate_board(spec, groups, made, attempted, BoardKind::RateTotal));
                    boards.push(rate_board(spec, groups, made, attempted, BoardKind::RatePerGame));
                }
            }
        }
        StatsReport { season: season.to_string(), dimension, boards }
    }
}

/// Half-up rounding of `total / appearances` at one decimal, computed in
/// integer space so exact halves always round up. Zero appearances means
/// a zero average.
fn per_game_average(total: i64, appearances: u32) -> f64 {
    if appearances == 0 {
        return 0.0;
    }
    let n = i64::from(appearances);
    let tenths = (total * 20 + n) / (2 * n);
    tenths as f64 / 10.0
}

/// Made over attempted; zero attempts means a zero rate.
fn hit_rate(made: i64, attempted: i64) -> f64 {
    if attempted <= 0 {
        0.0
    } else {
        made as f64 / attempted as f64
    }
}

fn total_board(
    spec: &MetricSpec,
    groups: &HashMap<String, GroupTotals>,
    total: fn(&GroupTotals) -> i64,
) -> Leaderboard {
    let rows = groups
        .iter()
        .map(|(name, g)| BoardRow {
            name: name.clone(),
            value: total(g) as f64,
            made: None,
            attempted: None,
        })
        .collect();
    ranked(spec, BoardKind::Total, rows)
}

fn per_game_board(
    spec: &MetricSpec,
    groups: &HashMap<String, GroupTotals>,
    total: fn(&GroupTotals) -> i64,
) -> Leaderboard {
    let rows = groups
        .iter()
        .map(|(name, g)| BoardRow {
            name: name.clone(),
            value: per_game_average(total(g), g.appearances),
            made: None,
            attempted: None,
        })
        .collect();
    ranked(spec, BoardKind::PerGame, rows)
}

fn rate_board(
    spec: &MetricSpec,
    groups: &HashMap<String, GroupTotals>,
    made: fn(&GroupTotals) -> i64,
    attempted: fn(&GroupTotals) -> i64,
    kind: BoardKind,
) -> Leaderboard {
    let rows = groups
        .iter()
        .map(|(name, g)| {
            let total_made = made(g);
            let total_attempted = attempted(g);
            // The sort key is always the raw-total rate, also on the
            // average-basis board; recomputing it from the rounded
            // displayed averages would introduce rounding drift.
            let rate = hit_rate(total_made, total_attempted);
            let (display_made, display_attempted) = match kind {
                BoardKind::RatePerGame => (
                    per_game_average(total_made, g.appearances),
                    per_game_average(total_attempted, g.appearances),
                ),
                _ => (total_made as f64, total_attempted as f64),
            };
            BoardRow {
                name: name.clone(),
                value: rate,
                made: Some(display_made),
                attempted: Some(display_attempted),
            }
        })
        .collect();
    ranked(spec, kind, rows)
}

fn ranked(spec: &MetricSpec, kind: BoardKind, mut rows: Vec<BoardRow>) -> Leaderboard {
    match kind {
        BoardKind::Total | BoardKind::PerGame => {
            rows.sort_by(|a, b| {
                b.value.total_cmp(&a.value).then_with(|| a.name.cmp(&b.name))
            });
        }
        BoardKind::RateTotal | BoardKind::RatePerGame => {
            let att = |r: &BoardRow| r.attempted.unwrap_or(0.0);
            let made = |r: &BoardRow| r.made.unwrap_or(0.0);
            rows.sort_by(|a, b| {
                b.value
                    .total_cmp(&a.value)
                    .then_with(|| att(b).total_cmp(&att(a)))
                    .then_with(|| made(b).total_cmp(&made(a)))
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
    }
    Leaderboard { metric: spec.metric, label: spec.label.to_string(), kind, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(
        appearances: u32,
        score: i64,
        fg_made: i64,
        fg_attempts: i64,
    ) -> GroupTotals {
        GroupTotals { appearances, score, fg_made, fg_attempts, ..Default::default() }
    }

    fn board<'a>(report: &'a StatsReport, metric: Metric, kind: BoardKind) -> &'a Leaderboard {
        report
            .boards
            .iter()
            .find(|b| b.metric == metric && b.kind == kind)
            .expect("board must exist")
    }

    fn names(board: &Leaderboard) -> Vec<&str> {
        board.rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_per_game_average_rounds_half_up() {
        assert_eq!(per_game_average(7, 3), 2.3);
        assert_eq!(per_game_average(5, 2), 2.5);
        assert_eq!(per_game_average(89, 20), 4.5);
        assert_eq!(per_game_average(0, 0), 0.0);
        assert_eq!(per_game_average(12, 0), 0.0);
    }

    #[test]
    fn test_hit_rate_zero_attempts() {
        assert_eq!(hit_rate(0, 0), 0.0);
        assert_eq!(hit_rate(3, 0), 0.0);
        assert_eq!(hit_rate(3, 6), 0.5);
    }

    #[test]
    fn test_total_board_sorts_desc_with_name_tiebreak() {
        let mut groups = HashMap::new();
        groups.insert("beta".to_string(), group(1, 10, 0, 0));
        groups.insert("alpha".to_string(), group(1, 10, 0, 0));
        groups.insert("carol".to_string(), group(1, 12, 0, 0));

        let report = LeaderboardBuilder::build("S7", Dimension::Player, &groups);
        let totals = board(&report, Metric::Score, BoardKind::Total);
        assert_eq!(names(totals), vec!["carol", "alpha", "beta"]);
        assert_eq!(totals.rows[0].value, 12.0);
    }

    #[test]
    fn test_per_game_board_uses_rounded_average() {
        let mut groups = HashMap::new();
        groups.insert("A".to_string(), group(3, 7, 0, 0));
        groups.insert("B".to_string(), group(2, 5, 0, 0));

        let report = LeaderboardBuilder::build("S7", Dimension::Player, &groups);
        let averages = board(&report, Metric::Score, BoardKind::PerGame);
        assert_eq!(names(averages), vec!["B", "A"]);
        assert_eq!(averages.rows[0].value, 2.5);
        assert_eq!(averages.rows[1].value, 2.3);
    }

    #[test]
    fn test_rate_tie_breaks_attempted_then_made_then_name() {
        // Three groups at exactly 50%: the bigger sample ranks first,
        // and the remaining tie falls through to the name.
        let mut groups = HashMap::new();
        groups.insert("beta".to_string(), group(1, 0, 4, 8));
        groups.insert("alpha".to_string(), group(1, 0, 4, 8));
        groups.insert("gamma".to_string(), group(1, 0, 3, 6));

        let report = LeaderboardBuilder::build("S7", Dimension::Player, &groups);
        let rates = board(&report, Metric::FgPct, BoardKind::RateTotal);
        assert_eq!(names(rates), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_rate_per_game_displays_averages_but_ranks_by_raw_rate() {
        let mut groups = HashMap::new();
        groups.insert("X".to_string(), group(5, 0, 17, 50)); // 0.34
        groups.insert("Y".to_string(), group(1, 0, 3, 9)); // 0.333…

        let report = LeaderboardBuilder::build("S7", Dimension::Player, &groups);

        let raw = board(&report, Metric::FgPct, BoardKind::RateTotal);
        assert_eq!(names(raw), vec!["X", "Y"]);
        assert_eq!(raw.rows[0].made, Some(17.0));
        assert_eq!(raw.rows[0].attempted, Some(50.0));

        let averaged = board(&report, Metric::FgPct, BoardKind::RatePerGame);
        assert_eq!(names(averaged), vec!["X", "Y"]);
        assert_eq!(averaged.rows[0].made, Some(3.4));
        assert_eq!(averaged.rows[0].attempted, Some(10.0));
        // Same sort key on both variants.
        assert_eq!(averaged.rows[0].value, raw.rows[0].value);
    }

    #[test]
    fn test_appearances_board_only_in_player_dimension() {
        let mut groups = HashMap::new();
        groups.insert("A".to_string(), group(2, 16, 6, 12));

        let player = LeaderboardBuilder::build("S7", Dimension::Player, &groups);
        let appearances: Vec<_> =
            player.boards.iter().filter(|b| b.metric == Metric::Appearances).collect();
        assert_eq!(appearances.len(), 1);
        assert_eq!(appearances[0].kind, BoardKind::Total);
        assert_eq!(appearances[0].rows[0].value, 2.0);

        let user = LeaderboardBuilder::build("S7", Dimension::User, &groups);
        assert!(user.boards.iter().all(|b| b.metric != Metric::Appearances));
    }

    #[test]
    fn test_boards_follow_catalog_order() {
        let groups = HashMap::new();
        let report = LeaderboardBuilder::build("S7", Dimension::Player, &groups);

        // 1 appearances board, 12 count metrics x 2 shapes, 2 rate
        // metrics x 2 variants.
        assert_eq!(report.boards.len(), 29);

        let metric_order: Vec<Metric> = report.boards.iter().map(|b| b.metric).collect();
        let mut expected = Vec::new();
        for spec in CATALOG {
            match spec.kind {
                MetricKind::Count { .. } if spec.metric == Metric::Appearances => {
                    expected.push(spec.metric);
                }
                MetricKind::Count { .. } => {
                    expected.push(spec.metric);
                    expected.push(spec.metric);
                }
                MetricKind::Rate { .. } => {
                    expected.push(spec.metric);
                    expected.push(spec.metric);
                }
            }
        }
        assert_eq!(metric_order, expected);
    }

    #[test]
    fn test_empty_input_yields_empty_boards_not_errors() {
        let groups = HashMap::new();
        let report = LeaderboardBuilder::build("S7", Dimension::User, &groups);
        assert_eq!(report.boards.len(), 28);
        assert!(report.boards.iter().all(|b| b.rows.is_empty()));
        assert_eq!(report.season, "S7");
        assert_eq!(report.dimension, Dimension::User);
    }

    #[test]
    fn test_build_twice_is_byte_identical() {
        let mut groups = HashMap::new();
        for (i, name) in ["E", "A", "D", "B", "C"].iter().enumerate() {
            groups.insert(name.to_string(), group(i as u32 + 1, 10, 4, 8));
        }
        let first = LeaderboardBuilder::build("S7", Dimension::Player, &groups);
        let second = LeaderboardBuilder::build("S7", Dimension::Player, &groups);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
