use crate::types::dimension::Dimension;
use crate::types::scoring::{Score, SCORE_MAX};

/// Rule-based scorer: one point per satisfied indicator, capped at the
/// range maximum. Zero satisfied indicators is a valid score of 0, not an
/// error. The answer list must match the dimension's indicator count;
/// intake validates user input, so a mismatch here is a programming error.
pub fn rule_based_score(dimension: Dimension, answers: &[bool]) -> Score {
    let expected = dimension.indicators().len();
    assert_eq!(
        answers.len(),
        expected,
        "answer count for {} must equal its indicator count ({expected})",
        dimension.name(),
    );
    let satisfied = answers.iter().filter(|answer| **answer).count() as Score;
    satisfied.min(SCORE_MAX)
}
