use crate::error::{EcoscoreError, Result};
use crate::types::report::AssessmentReport;
use crate::types::scoring::ScoreOutcome;

/// Tabular export: one row per dimension plus a trailing combined row.
/// Unavailable dimensions get an empty score cell rather than a zero so
/// the table does not misreport a measured value.
pub fn to_csv(report: &AssessmentReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["dimension", "score", "status"])?;

    for record in &report.records {
        let (score, status) = match &record.outcome {
            ScoreOutcome::Scored { value } => (format!("{value:.2}"), "scored".to_string()),
            ScoreOutcome::Fallback { value, .. } => {
                (format!("{value:.2}"), "fallback".to_string())
            }
            ScoreOutcome::Unavailable { .. } => (String::new(), "unavailable".to_string()),
        };
        writer.write_record([record.dimension.name(), score.as_str(), status.as_str()])?;
    }

    let combined = format!("{:.2}", report.aggregate.combined);
    let tier = report.aggregate.tier.to_string();
    writer.write_record(["Combined", combined.as_str(), tier.as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| EcoscoreError::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| EcoscoreError::Report(e.to_string()))
}
