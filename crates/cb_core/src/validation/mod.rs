//! Write-time consistency validation for match submissions.
//!
//! A submission is a header plus optional team totals and player lines.
//! Checks run as an ordered rule chain with first-failure-wins semantics;
//! each rule is gated on a tier precondition so a header-only save skips
//! the list-level checks entirely.

mod rules;


use thiserror::Error;

use crate::models::{MatchRecord, PlayerLine, Side, TeamTotals};

use rules::{RuleCtx, RULE_CHAIN};

/// A violated business rule. Messages are business language, safe to
/// surface to the end user unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{side} side must record exactly one team totals row, found {found}")]
    TeamCardinality { side: Side, found: usize },

    #[error("{side} team {kind} made ({made}) exceeds attempted ({attempted})")]
    TeamMadeOverAttempted { side: Side, kind: &'static str, made: i32, attempted: i32 },

    #[error("{side} team rebounds ({total}) must equal offensive ({off}) plus defensive ({def})")]
    ReboundSplitMismatch { side: Side, total: i32, off: i32, def: i32 },

    #[error("{side} team {field} cannot be negative ({value})")]
    NegativeTeamStat { side: Side, field: &'static str, value: i32 },

    #[error("{side} side must field exactly {expected} players, found {found}")]
    PlayerCardinality { side: Side, expected: usize, found: usize },

    #[error("player '{who}' {kind} made ({made}) exceeds attempted ({attempted})")]
    PlayerMadeOverAttempted { who: String, kind: &'static str, made: i32, attempted: i32 },

    #[error("player '{who}' cannot take both the MVP and SVP honors")]
    MvpSvpConflict { who: String },

    #[error("player '{who}' {field} cannot be negative ({value})")]
    NegativePlayerStat { who: String, field: &'static str, value: i32 },

    #[error("header {side} score ({header}) does not match the {side} team totals score ({team})")]
    HeaderScoreMismatch { side: Side, header: i32, team: i32 },

    #[error("{side} team score ({team}) does not match the sum of its player scores ({players})")]
    TeamPlayerScoreMismatch { side: Side, team: i32, players: i64 },

    #[error("own team {field} ({team}) does not match the sum over its player lines ({players})")]
    SharedFieldMismatch { field: &'static str, team: i32, players: i64 },
}

/// Match submission validator.
///
/// Pure and synchronous; the caller runs it inside the same unit of work
/// as the write it gates and aborts that unit of work on failure.
pub struct MatchValidator;

impl MatchValidator {
    /// Validate a proposed submission. Empty slices mean the list was not
    /// supplied; a header-only submission is a legal basic-info save.
    pub fn validate(
        header: &MatchRecord,
        team_totals: &[TeamTotals],
        player_lines: &[PlayerLine],
    ) -> Result<(), ValidationError> {
        let ctx = RuleCtx { header, team_totals, player_lines };
        for rule in RULE_CHAIN {
            if rule.tier.applies(&ctx) {
                (rule.check)(&ctx)?;
            }
        }
        log::debug!(
            "match submission for season {} game {} passed validation",
            header.season,
            header.game_no
        );
        Ok(())
    }
}
