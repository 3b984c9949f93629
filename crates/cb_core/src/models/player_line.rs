//! Per-player box score line for a single match.

use serde::{Deserialize, Serialize};

use super::team_totals::Side;

/// One player's line in a recorded match.
///
/// `operator` is the human who controlled the player and may be blank on
/// the opponent side; `subject` is the played character. Both feed the
/// report grouping dimensions. Counting fields deserialize missing
/// values to zero; negatives are rejected by the validator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerLine {
    pub side: Side,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub mvp: bool,
    #[serde(default)]
    pub svp: bool,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub rebounds: i32,
    #[serde(default)]
    pub steals: i32,
    #[serde(default)]
    pub blocks: i32,
    #[serde(default)]
    pub turnovers: i32,
    #[serde(default)]
    pub dunks: i32,
    #[serde(default)]
    pub fg_attempts: i32,
    #[serde(default)]
    pub fg_made: i32,
    #[serde(default)]
    pub three_attempts: i32,
    #[serde(default)]
    pub three_made: i32,
    #[serde(default)]
    pub mid_range_made: i32,
    #[serde(default)]
    pub best_run: i32,
}

impl PlayerLine {
    /// Every counting field with its name, for uniform range checks.
    pub fn counting_fields(&self) -> [(&'static str, i32); 13] {
        [
            ("score", self.score),
            ("assists", self.assists),
            ("rebounds", self.rebounds),
            ("steals", self.steals),
            ("blocks", self.blocks),
            ("turnovers", self.turnovers),
            ("dunks", self.dunks),
            ("field goals attempted", self.fg_attempts),
            ("field goals made", self.fg_made),
            ("three pointers attempted", self.three_attempts),
            ("three pointers made", self.three_made),
            ("mid range makes", self.mid_range_made),
            ("best scoring run", self.best_run),
        ]
    }

    /// Best-effort display name for error messages: subject first, then
    /// operator, then a placeholder.
    pub fn display_name(&self) -> &str {
        for name in [self.subject.as_deref(), self.operator.as_deref()]
            .into_iter()
            .flatten()
        {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                return trimmed;
            }
        }
        "unnamed player"
    }
}
