use crate::types::dimension::Dimension;
use crate::types::scoring::{
    round2, AggregateResult, DimensionScoreRecord, MaturityTier, Score, SCORE_MIN,
};

/// Mean over all four dimensions, divided unconditionally by four. A
/// dimension with no record or with an unavailable outcome contributes the
/// range minimum, never a skipped divisor.
pub fn aggregate(records: &[DimensionScoreRecord]) -> AggregateResult {
    let total: Score = Dimension::ALL
        .iter()
        .map(|dimension| {
            records
                .iter()
                .find(|record| record.dimension == *dimension)
                .and_then(|record| record.outcome.effective())
                .unwrap_or(SCORE_MIN)
        })
        .sum();
    let combined = round2(total / Dimension::ALL.len() as Score);
    AggregateResult {
        combined,
        tier: MaturityTier::from_combined(combined),
    }
}
