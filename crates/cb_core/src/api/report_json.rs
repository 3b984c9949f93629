//! JSON boundary for the read path: aggregate a batch and build the
//! leaderboard report.

use serde::Deserialize;
use tracing::info;

use crate::error::{CoreError, Result};
use crate::models::PlayerLine;
use crate::stats::{Dimension, LeaderboardBuilder, StatsAggregator};
use crate::SCHEMA_VERSION;

/// Report query: a season label (passed through verbatim), the grouping
/// dimension, and the batch of own-side player lines already scoped by
/// the caller.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub schema_version: u8,
    pub season: String,
    pub dimension: Dimension,
    #[serde(default)]
    pub player_lines: Vec<PlayerLine>,
}

/// Build the full leaderboard report for a batch supplied as JSON.
///
/// The response is the serialized [`StatsReport`](crate::stats::StatsReport).
/// Dirty business data (blank names, missing fields) degrades to
/// zero/"UNKNOWN"; only a malformed request itself is an error.
pub fn build_report_json(request_json: &str) -> Result<String> {
    let request: ReportRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported schema_version: {}",
            request.schema_version
        )));
    }

    let groups = StatsAggregator::aggregate(&request.player_lines, request.dimension);
    let report = LeaderboardBuilder::build(&request.season, request.dimension, &groups);
    info!(
        "built {} boards over {} lines for season {} by {}",
        report.boards.len(),
        request.player_lines.len(),
        report.season,
        request.dimension
    );
    Ok(serde_json::to_string(&report)?)
}
