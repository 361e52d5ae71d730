use crate::oracle::{prompts, ScoringOracle};
use crate::scoring::AssessmentState;
use crate::types::report::RecommendationBlock;
use crate::types::scoring::MATURE_THRESHOLD;

/// Requests improvement actions for every dimension scoring below the
/// mature threshold. One stateless oracle request per dimension, no
/// retries; a failed request skips that dimension and records a warning.
/// Unscored dimensions are skipped outright since there is no score to
/// improve on.
pub fn generate_recommendations(
    state: &AssessmentState,
    oracle: &dyn ScoringOracle,
) -> (Vec<RecommendationBlock>, Vec<String>) {
    let mut blocks = Vec::new();
    let mut warnings = Vec::new();

    for record in &state.records {
        let Some(score) = record.outcome.effective() else {
            continue;
        };
        if score >= MATURE_THRESHOLD {
            continue;
        }

        let prompt =
            prompts::recommendation_prompt(record.dimension, score, record.notes.as_deref());
        match oracle.complete(prompts::ADVISOR_SYSTEM_PROMPT, &prompt) {
            Ok(text) => blocks.push(RecommendationBlock {
                dimension: record.dimension,
                score,
                text,
            }),
            Err(err) => {
                tracing::warn!("{}: recommendations unavailable: {}", record.dimension.id(), err);
                warnings.push(format!(
                    "{}: recommendations unavailable: {}",
                    record.dimension.id(),
                    err
                ));
            }
        }
    }

    (blocks, warnings)
}
