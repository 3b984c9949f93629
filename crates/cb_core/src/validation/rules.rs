//! The ordered rule chain behind [`MatchValidator`](super::MatchValidator).
//!
//! Each rule names the tier it belongs to; a tier's precondition decides
//! whether the rule fires for a given submission. Rules run in declaration
//! order and the first violation wins.

use crate::models::{MatchRecord, PlayerLine, Side, TeamTotals};

use super::ValidationError;

/// Players fielded per side in a full submission.
pub(super) const PLAYERS_PER_SIDE: usize = 3;

/// Validation tiers, from coarse to fine granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tier {
    /// Header-level checks. Always runs; currently an extension point
    /// with no rules of its own.
    Header,
    /// Team totals checks. Runs only when totals were supplied.
    Team,
    /// Player line checks, including cross-level sums. Runs only when
    /// the team tier ran and player lines were supplied.
    Player,
}

impl Tier {
    pub(super) fn applies(&self, ctx: &RuleCtx<'_>) -> bool {
        match self {
            Tier::Header => true,
            Tier::Team => !ctx.team_totals.is_empty(),
            Tier::Player => !ctx.team_totals.is_empty() && !ctx.player_lines.is_empty(),
        }
    }
}

/// Borrowed view of one submission, shared by every rule.
pub(super) struct RuleCtx<'a> {
    pub header: &'a MatchRecord,
    pub team_totals: &'a [TeamTotals],
    pub player_lines: &'a [PlayerLine],
}

impl RuleCtx<'_> {
    fn totals_for(&self, side: Side) -> Option<&TeamTotals> {
        self.team_totals.iter().find(|t| t.side == side)
    }

    fn lines_on(&self, side: Side) -> impl Iterator<Item = &PlayerLine> {
        self.player_lines.iter().filter(move |l| l.side == side)
    }

    fn header_score(&self, side: Side) -> i32 {
        match side {
            Side::Own => self.header.own_score,
            Side::Opponent => self.header.opponent_score,
        }
    }
}

pub(super) struct Rule {
    pub tier: Tier,
    pub check: fn(&RuleCtx<'_>) -> Result<(), ValidationError>,
}

/// The full chain, in evaluation order.
pub(super) const RULE_CHAIN: &[Rule] = &[
    Rule { tier: Tier::Team, check: team_cardinality },
    Rule { tier: Tier::Team, check: team_shot_sanity },
    Rule { tier: Tier::Team, check: team_rebound_split },
    Rule { tier: Tier::Team, check: team_non_negative },
    Rule { tier: Tier::Player, check: player_cardinality },
    Rule { tier: Tier::Player, check: player_shot_sanity },
    Rule { tier: Tier::Player, check: player_honors_exclusive },
    Rule { tier: Tier::Player, check: player_non_negative },
    Rule { tier: Tier::Player, check: header_vs_team_score },
    Rule { tier: Tier::Player, check: team_vs_player_score },
    Rule { tier: Tier::Player, check: own_shared_field_sums },
];

fn team_cardinality(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for side in Side::BOTH {
        let found = ctx.team_totals.iter().filter(|t| t.side == side).count();
        if found != 1 {
            return Err(ValidationError::TeamCardinality { side, found });
        }
    }
    Ok(())
}

fn team_shot_sanity(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for totals in ctx.team_totals {
        for (kind, made, attempted) in [
            ("field goal", totals.fg_made, totals.fg_attempts),
            ("three point", totals.three_made, totals.three_attempts),
        ] {
            if made > attempted {
                return Err(ValidationError::TeamMadeOverAttempted {
                    side: totals.side,
                    kind,
                    made,
                    attempted,
                });
            }
        }
    }
    Ok(())
}

fn team_rebound_split(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for totals in ctx.team_totals {
        if totals.rebounds != totals.off_rebounds + totals.def_rebounds {
            return Err(ValidationError::ReboundSplitMismatch {
                side: totals.side,
                total: totals.rebounds,
                off: totals.off_rebounds,
                def: totals.def_rebounds,
            });
        }
    }
    Ok(())
}

fn team_non_negative(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for totals in ctx.team_totals {
        for (field, value) in totals.counting_fields() {
            if value < 0 {
                return Err(ValidationError::NegativeTeamStat { side: totals.side, field, value });
            }
        }
    }
    Ok(())
}

fn player_cardinality(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    let own = ctx.lines_on(Side::Own).count();
    if own != PLAYERS_PER_SIDE {
        return Err(ValidationError::PlayerCardinality {
            side: Side::Own,
            expected: PLAYERS_PER_SIDE,
            found: own,
        });
    }

    let opponent = ctx.lines_on(Side::Opponent).count();
    // A CPU opponent may go unrecorded entirely.
    let acceptable = if ctx.header.cpu_opponent {
        opponent == 0 || opponent == PLAYERS_PER_SIDE
    } else {
        opponent == PLAYERS_PER_SIDE
    };
    if !acceptable {
        return Err(ValidationError::PlayerCardinality {
            side: Side::Opponent,
            expected: PLAYERS_PER_SIDE,
            found: opponent,
        });
    }
    Ok(())
}

fn player_shot_sanity(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for line in ctx.player_lines {
        for (kind, made, attempted) in [
            ("field goal", line.fg_made, line.fg_attempts),
            ("three point", line.three_made, line.three_attempts),
        ] {
            if made > attempted {
                return Err(ValidationError::PlayerMadeOverAttempted {
                    who: line.display_name().to_string(),
                    kind,
                    made,
                    attempted,
                });
            }
        }
    }
    Ok(())
}

fn player_honors_exclusive(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for line in ctx.player_lines {
        if line.mvp && line.svp {
            return Err(ValidationError::MvpSvpConflict {
                who: line.display_name().to_string(),
            });
        }
    }
    Ok(())
}

fn player_non_negative(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for line in ctx.player_lines {
        for (field, value) in line.counting_fields() {
            if value < 0 {
                return Err(ValidationError::NegativePlayerStat {
                    who: line.display_name().to_string(),
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn header_vs_team_score(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for side in Side::BOTH {
        // Cardinality is enforced earlier in the chain.
        let totals = match ctx.totals_for(side) {
            Some(t) => t,
            None => continue,
        };
        let header = ctx.header_score(side);
        if header != totals.score {
            return Err(ValidationError::HeaderScoreMismatch { side, header, team: totals.score });
        }
    }
    Ok(())
}

fn team_vs_player_score(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    for side in Side::BOTH {
        // The cross-check is skipped wholesale for a CPU opponent, even
        // when its three player lines were recorded.
        if side == Side::Opponent && ctx.header.cpu_opponent {
            continue;
        }
        let totals = match ctx.totals_for(side) {
            Some(t) => t,
            None => continue,
        };
        let players: i64 = ctx.lines_on(side).map(|l| i64::from(l.score)).sum();
        if i64::from(totals.score) != players {
            return Err(ValidationError::TeamPlayerScoreMismatch {
                side,
                team: totals.score,
                players,
            });
        }
    }
    Ok(())
}

fn own_shared_field_sums(ctx: &RuleCtx<'_>) -> Result<(), ValidationError> {
    let totals = match ctx.totals_for(Side::Own) {
        Some(t) => t,
        None => return Ok(()),
    };
    let shared: [(&'static str, i32, fn(&PlayerLine) -> i32); 9] = [
        ("field goals attempted", totals.fg_attempts, |l| l.fg_attempts),
        ("field goals made", totals.fg_made, |l| l.fg_made),
        ("three pointers attempted", totals.three_attempts, |l| l.three_attempts),
        ("three pointers made", totals.three_made, |l| l.three_made),
        ("assists", totals.assists, |l| l.assists),
        ("rebounds", totals.rebounds, |l| l.rebounds),
        ("steals", totals.steals, |l| l.steals),
        ("blocks", totals.blocks, |l| l.blocks),
        ("dunks", totals.dunks, |l| l.dunks),
    ];
    for (field, team, extract) in shared {
        let players: i64 = ctx.lines_on(Side::Own).map(|l| i64::from(extract(l))).sum();
        if i64::from(team) != players {
            return Err(ValidationError::SharedFieldMismatch { field, team, players });
        }
    }
    Ok(())
}
