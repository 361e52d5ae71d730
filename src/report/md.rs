use crate::types::report::AssessmentReport;
use crate::types::scoring::{ScoreOutcome, SCORE_MAX};

pub fn to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("# Climate Finance Ecosystem Maturity Report\n\n");
    output.push_str(&format!("{}\n\n", report.title));
    output.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output.push_str("## Dimension Scores\n\n");
    for record in &report.records {
        let line = match &record.outcome {
            ScoreOutcome::Scored { value } => {
                format!("- {}: {:.2}/{:.0}\n", record.dimension, value, SCORE_MAX)
            }
            ScoreOutcome::Fallback { value, reason } => format!(
                "- {}: {:.2}/{:.0} (fallback: {})\n",
                record.dimension, value, SCORE_MAX, reason
            ),
            ScoreOutcome::Unavailable { reason } => {
                format!("- {}: unavailable ({})\n", record.dimension, reason)
            }
        };
        output.push_str(&line);
    }
    output.push('\n');

    output.push_str(&format!(
        "Combined score: {:.2}/{:.0} (tier: {})\n\n",
        report.aggregate.combined, SCORE_MAX, report.aggregate.tier
    ));

    let oracle_records: Vec<_> = report
        .records
        .iter()
        .filter(|record| record.oracle_text.is_some())
        .collect();
    if !oracle_records.is_empty() {
        output.push_str("## Oracle Assessments\n\n");
        for record in oracle_records {
            output.push_str(&format!("### {}\n\n", record.dimension));
            if let Some(text) = &record.oracle_text {
                output.push_str(text);
                output.push_str("\n\n");
            }
        }
    }

    if !report.recommendations.is_empty() {
        output.push_str("## Recommendations\n\n");
        for block in &report.recommendations {
            output.push_str(&format!(
                "### {} (score {:.2})\n\n{}\n\n",
                block.dimension, block.score, block.text
            ));
        }
    }

    output.push_str("## Warnings\n\n");
    if report.warnings.is_empty() {
        output.push_str("- none\n");
    } else {
        for warning in &report.warnings {
            output.push_str(&format!("- {warning}\n"));
        }
    }

    output
}
