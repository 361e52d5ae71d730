use crate::error::Result;
use crate::types::report::AssessmentReport;

pub fn to_json(report: &AssessmentReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
