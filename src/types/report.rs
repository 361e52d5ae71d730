use crate::types::dimension::Dimension;
use crate::types::scoring::{AggregateResult, DimensionScoreRecord, Score};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One improvement-action block returned by the oracle for a
/// below-mature dimension.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationBlock {
    pub dimension: Dimension,
    pub score: Score,
    pub text: String,
}

/// The full rendered output of one scoring pass.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub records: Vec<DimensionScoreRecord>,
    pub aggregate: AggregateResult,
    pub recommendations: Vec<RecommendationBlock>,
    pub warnings: Vec<String>,
}
