pub mod aggregate;
pub mod extract;
pub mod rules;

use crate::intake::Assessment;
use crate::oracle::{prompts, ScoringOracle};
use crate::types::dimension::Dimension;
use crate::types::evidence::Evidence;
use crate::types::scoring::{AggregateResult, DimensionScoreRecord, ScoreOutcome};

/// All scoring state for one session: one record per fixed dimension plus
/// accumulated degradation warnings. Passed explicitly between intake,
/// scoring, and rendering.
#[derive(Debug, Clone)]
pub struct AssessmentState {
    pub title: String,
    pub records: Vec<DimensionScoreRecord>,
    pub warnings: Vec<String>,
}

impl AssessmentState {
    /// Pure projection over the current records, recomputed on every call.
    pub fn aggregate(&self) -> AggregateResult {
        aggregate::aggregate(&self.records)
    }
}

/// Scores every dimension of the assessment in the fixed order. Oracle
/// failures degrade the affected dimension only; the pass always yields a
/// record per dimension so aggregation can proceed.
pub fn score_assessment(
    assessment: &Assessment,
    oracle: Option<&dyn ScoringOracle>,
) -> AssessmentState {
    let mut records = Vec::with_capacity(Dimension::ALL.len());
    let mut warnings = assessment.warnings.clone();

    for dimension in Dimension::ALL {
        let record = match assessment.evidence.get(&dimension) {
            None => DimensionScoreRecord {
                dimension,
                outcome: ScoreOutcome::Unavailable {
                    reason: "no evidence supplied".to_string(),
                },
                oracle_text: None,
                notes: None,
            },
            Some(Evidence::Manual { answers, notes }) => DimensionScoreRecord {
                dimension,
                outcome: ScoreOutcome::Scored {
                    value: rules::rule_based_score(dimension, answers),
                },
                oracle_text: None,
                notes: notes.clone(),
            },
            Some(Evidence::Narrative { text }) => score_narrative(dimension, text, oracle),
        };

        if let Some(reason) = record.outcome.reason() {
            tracing::warn!("{}: {}", dimension.id(), reason);
            warnings.push(format!("{}: {}", dimension.id(), reason));
        }
        records.push(record);
    }

    AssessmentState {
        title: assessment.title.clone(),
        records,
        warnings,
    }
}

fn score_narrative(
    dimension: Dimension,
    text: &str,
    oracle: Option<&dyn ScoringOracle>,
) -> DimensionScoreRecord {
    let Some(oracle) = oracle else {
        return DimensionScoreRecord {
            dimension,
            outcome: ScoreOutcome::Unavailable {
                reason: "oracle not configured; use manual scoring".to_string(),
            },
            oracle_text: None,
            notes: None,
        };
    };

    match oracle.complete(&prompts::assessment_prompt(dimension), text) {
        Ok(response) => {
            let outcome = extract::extract_score(&response);
            DimensionScoreRecord {
                dimension,
                outcome,
                oracle_text: Some(response),
                notes: None,
            }
        }
        Err(err) => DimensionScoreRecord {
            dimension,
            outcome: ScoreOutcome::Unavailable {
                reason: err.to_string(),
            },
            oracle_text: None,
            notes: None,
        },
    }
}
