pub mod match_record;
pub mod player_line;
pub mod team_totals;

pub use match_record::{MatchOutcome, MatchRecord};
pub use player_line::PlayerLine;
pub use team_totals::{Side, TeamTotals};
