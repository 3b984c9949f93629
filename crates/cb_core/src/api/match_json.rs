//! JSON boundary for the write path: validate a candidate submission.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::models::{MatchRecord, PlayerLine, TeamTotals};
use crate::validation::MatchValidator;
use crate::SCHEMA_VERSION;

/// Candidate submission: header plus optional lists. Omitted lists mean
/// a basic-info-only save.
#[derive(Debug, Deserialize)]
pub struct ValidateMatchRequest {
    pub schema_version: u8,
    #[serde(rename = "match")]
    pub header: MatchRecord,
    #[serde(default)]
    pub team_totals: Vec<TeamTotals>,
    #[serde(default)]
    pub player_lines: Vec<PlayerLine>,
}

#[derive(Debug, Serialize)]
pub struct ValidateMatchResponse {
    pub schema_version: u8,
    pub accepted: bool,
}

/// Validate a match submission supplied as JSON.
///
/// Returns the acceptance payload on success. A violated business rule
/// surfaces as [`CoreError::Validation`] with its message intact, so the
/// write-path collaborator can abort its transaction and show the
/// message to the end user unchanged.
pub fn validate_match_json(request_json: &str) -> Result<String> {
    let request: ValidateMatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported schema_version: {}",
            request.schema_version
        )));
    }

    debug!(
        "validating submission: season {} game {} ({} totals, {} lines)",
        request.header.season,
        request.header.game_no,
        request.team_totals.len(),
        request.player_lines.len()
    );
    MatchValidator::validate(&request.header, &request.team_totals, &request.player_lines)?;
    info!(
        "accepted submission: season {} game {}",
        request.header.season, request.header.game_no
    );

    let response = ValidateMatchResponse { schema_version: SCHEMA_VERSION, accepted: true };
    Ok(serde_json::to_string(&response)?)
}
