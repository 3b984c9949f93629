pub mod match_json;
pub mod report_json;

pub use match_json::{validate_match_json, ValidateMatchRequest, ValidateMatchResponse};
pub use report_json::{build_report_json, ReportRequest};
