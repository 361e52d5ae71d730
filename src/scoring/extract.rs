use crate::types::scoring::{round2, Score, ScoreOutcome, SCORE_MAX, SCORE_MIDPOINT, SCORE_MIN};
use regex::Regex;
use std::sync::OnceLock;

/// Matches sub-component rating lines of the form "(n) Label: d" with a
/// single digit 0-4. The trailing boundary keeps "…: 25" from matching.
const SUBSCORE_PATTERN: &str = r"\(\d+\)\s*[^:\n]+:\s*([0-4])\b";

fn subscore_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(SUBSCORE_PATTERN).expect("pattern is valid"))
}

/// All sub-component ratings embedded in an oracle response, in order of
/// appearance.
pub fn extract_subscores(text: &str) -> Vec<u8> {
    subscore_regex()
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .filter_map(|digit| digit.as_str().parse::<u8>().ok())
        .collect()
}

/// Reduces an oracle response to a score. The response text itself is
/// preserved by the caller; this is only the derived numeric convenience.
/// Off-format prose yields the documented midpoint fallback, never an error.
pub fn extract_score(text: &str) -> ScoreOutcome {
    let subscores = extract_subscores(text);
    if subscores.is_empty() {
        return ScoreOutcome::Fallback {
            value: SCORE_MIDPOINT,
            reason: "no sub-component ratings found in oracle response".to_string(),
        };
    }
    let mean = subscores.iter().map(|s| *s as Score).sum::<Score>() / subscores.len() as Score;
    ScoreOutcome::Scored {
        value: round2(mean).clamp(SCORE_MIN, SCORE_MAX),
    }
}
