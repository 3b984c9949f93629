//! Per-group running totals over a batch of player lines.

use std::collections::HashMap;

use crate::models::PlayerLine;

use super::Dimension;

/// Group label for lines whose identity is blank or missing. Such lines
/// are kept, never dropped.
pub const UNKNOWN_GROUP: &str = "UNKNOWN";

/// Running totals for one group. Counts are widened to i64 so a long
/// season of batches can never overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTotals {
    pub appearances: u32,
    pub score: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub turnovers: i64,
    pub fg_attempts: i64,
    pub fg_made: i64,
    pub three_attempts: i64,
    pub three_made: i64,
    pub mvp_awards: i64,
    pub svp_awards: i64,
}

impl GroupTotals {
    fn absorb(&mut self, line: &PlayerLine) {
        self.appearances += 1;
        self.score += i64::from(line.score);
        self.rebounds += i64::from(line.rebounds);
        self.assists += i64::from(line.assists);
        self.steals += i64::from(line.steals);
        self.blocks += i64::from(line.blocks);
        self.turnovers += i64::from(line.turnovers);
        self.fg_attempts += i64::from(line.fg_attempts);
        self.fg_made += i64::from(line.fg_made);
        self.three_attempts += i64::from(line.three_attempts);
        self.three_made += i64::from(line.three_made);
        if line.mvp {
            self.mvp_awards += 1;
        }
        if line.svp {
            self.svp_awards += 1;
        }
    }
}

/// Folds a flat batch of player lines into per-group totals.
///
/// The caller restricts the batch to the own side and the requested
/// season scope beforehand; no filtering happens here. Iteration order
/// of the returned map is unspecified.
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn aggregate(
        lines: &[PlayerLine],
        dimension: Dimension,
    ) -> HashMap<String, GroupTotals> {
        let mut groups: HashMap<String, GroupTotals> = HashMap::new();
        for line in lines {
            let key = Self::group_key(line, dimension);
            groups.entry(key).or_default().absorb(line);
        }
        groups
    }

    fn group_key(line: &PlayerLine, dimension: Dimension) -> String {
        let raw = match dimension {
            Dimension::Player => line.subject.as_deref(),
            Dimension::User => line.operator.as_deref(),
        };
        match raw.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                log::debug!("player line without a {} identity grouped as {}", dimension, UNKNOWN_GROUP);
                UNKNOWN_GROUP.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;

    fn line(subject: Option<&str>, operator: Option<&str>) -> PlayerLine {
        PlayerLine {
            side: Side::Own,
            subject: subject.map(str::to_string),
            operator: operator.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_grouping_accumulates_totals() {
        let mut first = line(Some("A"), Some("kim"));
        first.score = 10;
        first.fg_made = 4;
        first.fg_attempts = 8;
        let mut second = line(Some("A"), Some("kim"));
        second.score = 6;
        second.fg_made = 2;
        second.fg_attempts = 4;

        let groups = StatsAggregator::aggregate(&[first, second], Dimension::Player);
        assert_eq!(groups.len(), 1);
        let a = &groups["A"];
        assert_eq!(a.appearances, 2);
        assert_eq!(a.score, 16);
        assert_eq!(a.fg_made, 6);
        assert_eq!(a.fg_attempts, 12);
    }

    #[test]
    fn test_dimension_selects_identity() {
        let lines = vec![line(Some("A"), Some("kim")), line(Some("B"), Some("kim"))];

        let by_player = StatsAggregator::aggregate(&lines, Dimension::Player);
        assert_eq!(by_player.len(), 2);

        let by_user = StatsAggregator::aggregate(&lines, Dimension::User);
        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user["kim"].appearances, 2);
    }

    #[test]
    fn test_blank_identity_groups_as_unknown() {
        let lines = vec![
            line(None, None),
            line(Some(""), None),
            line(Some("   "), None),
            line(Some("A"), None),
        ];
        let groups = StatsAggregator::aggregate(&lines, Dimension::Player);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[UNKNOWN_GROUP].appearances, 3);
        assert_eq!(groups["A"].appearances, 1);
    }

    #[test]
    fn test_identity_is_trimmed() {
        let lines = vec![line(Some(" A "), None), line(Some("A"), None)];
        let groups = StatsAggregator::aggregate(&lines, Dimension::Player);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["A"].appearances, 2);
    }

    #[test]
    fn test_empty_batch_yields_empty_map() {
        let groups = StatsAggregator::aggregate(&[], Dimension::Player);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_honor_flags_counted() {
        let mut mvp = line(Some("A"), None);
        mvp.mvp = true;
        let mut svp = line(Some("A"), None);
        svp.svp = true;
        let groups = StatsAggregator::aggregate(&[mvp, svp], Dimension::Player);
        assert_eq!(groups["A"].mvp_awards, 1);
        assert_eq!(groups["A"].svp_awards, 1);
    }
}
