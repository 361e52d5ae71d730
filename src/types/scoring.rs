use crate::types::dimension::Dimension;
use serde::Serialize;
use std::fmt;

pub type Score = f32;

/// Canonical score range: 0 = no evidence of maturity, 4 = fully mature.
pub const SCORE_MIN: Score = 0.0;
pub const SCORE_MAX: Score = 4.0;
pub const SCORE_MIDPOINT: Score = 2.0;

/// Tier boundaries on the combined score.
pub const TIER_LOW_BELOW: Score = 1.5;
pub const TIER_MEDIUM_BELOW: Score = 2.5;

/// A dimension counts as mature only at the range maximum; anything below
/// triggers a recommendation request.
pub const MATURE_THRESHOLD: Score = SCORE_MAX;

pub fn round2(value: Score) -> Score {
    (value * 100.0).round() / 100.0
}

/// Outcome of one scoring pass for one dimension. Callers can tell a real
/// score from a documented fallback and from a pass where no score could be
/// produced at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Scored { value: Score },
    Fallback { value: Score, reason: String },
    Unavailable { reason: String },
}

impl ScoreOutcome {
    /// The value this outcome contributes to aggregation, if any.
    /// Unavailable dimensions contribute nothing here; the aggregator
    /// substitutes the range minimum.
    pub fn effective(&self) -> Option<Score> {
        match self {
            ScoreOutcome::Scored { value } | ScoreOutcome::Fallback { value, .. } => Some(*value),
            ScoreOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, ScoreOutcome::Scored { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ScoreOutcome::Scored { .. } => None,
            ScoreOutcome::Fallback { reason, .. } | ScoreOutcome::Unavailable { reason } => {
                Some(reason)
            }
        }
    }
}

/// The current score for one dimension together with its evidence trail.
/// Overwritten on every re-scoring; no history is kept.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreRecord {
    pub dimension: Dimension,
    pub outcome: ScoreOutcome,
    /// Raw oracle response, preserved verbatim for human review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    /// Free-text notes collected alongside manual checkbox answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityTier {
    Low,
    Medium,
    High,
}

impl MaturityTier {
    /// Pure function of the combined score; no hysteresis.
    pub fn from_combined(combined: Score) -> Self {
        if combined < TIER_LOW_BELOW {
            MaturityTier::Low
        } else if combined < TIER_MEDIUM_BELOW {
            MaturityTier::Medium
        } else {
            MaturityTier::High
        }
    }
}

impl fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaturityTier::Low => "Low",
            MaturityTier::Medium => "Medium",
            MaturityTier::High => "High",
        };
        f.write_str(label)
    }
}

/// Mean of the four dimension scores plus the derived tier. A pure
/// projection, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateResult {
    pub combined: Score,
    pub tier: MaturityTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_fixed() {
        assert_eq!(MaturityTier::from_combined(0.0), MaturityTier::Low);
        assert_eq!(MaturityTier::from_combined(1.49), MaturityTier::Low);
        assert_eq!(MaturityTier::from_combined(1.5), MaturityTier::Medium);
        assert_eq!(MaturityTier::from_combined(2.49), MaturityTier::Medium);
        assert_eq!(MaturityTier::from_combined(2.5), MaturityTier::High);
        assert_eq!(MaturityTier::from_combined(4.0), MaturityTier::High);
    }

    #[test]
    fn effective_value_ignores_unavailable() {
        let scored = ScoreOutcome::Scored { value: 3.0 };
        let fallback = ScoreOutcome::Fallback {
            value: 2.0,
            reason: "no ratings found".to_string(),
        };
        let unavailable = ScoreOutcome::Unavailable {
            reason: "oracle error".to_string(),
        };
        assert_eq!(scored.effective(), Some(3.0));
        assert_eq!(fallback.effective(), Some(2.0));
        assert_eq!(unavailable.effective(), None);
        assert!(!scored.is_degraded());
        assert!(fallback.is_degraded());
        assert!(unavailable.is_degraded());
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(9.0 / 4.0), 2.25);
        assert_eq!(round2(7.0 / 3.0), 2.33);
        assert_eq!(round2(8.0 / 3.0), 2.67);
    }
}
