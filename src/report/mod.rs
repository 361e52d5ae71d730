pub mod csv;
pub mod json;
pub mod md;

use crate::error::Result;
use crate::types::report::AssessmentReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Md,
    Json,
    Csv,
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report),
        OutputFormat::Csv => csv::to_csv(report),
    }
}
