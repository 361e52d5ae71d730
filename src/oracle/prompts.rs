use crate::types::dimension::Dimension;
use crate::types::scoring::Score;

/// System instruction for narrative scoring. The response is expected to
/// rate each sub-component on its own line as "(n) Sub-component: score",
/// which is what the extractor scans for.
pub fn assessment_prompt(dimension: Dimension) -> String {
    format!(
        "You are a climate finance expert. Based on the following narrative and any \
         attached document text, assess the maturity of the {name} using relevant \
         sub-components. Assign a maturity score from 0 to 4 for each sub-component, \
         one per line formatted exactly as \"(n) Sub-component name: score\", and \
         explain each score briefly. Then provide 3 prioritized action \
         recommendations that would help improve the {name} if any score is below 4.",
        name = dimension.name()
    )
}

pub const ADVISOR_SYSTEM_PROMPT: &str =
    "You are a climate finance expert advising on ecosystem maturity improvements.";

/// User content for the one-shot recommendation request issued for a
/// below-mature dimension.
pub fn recommendation_prompt(dimension: Dimension, score: Score, notes: Option<&str>) -> String {
    let mut prompt = format!(
        "Provide 3-5 concrete, prioritized recommendations for improving the {} based \
         on the score of {:.2}.",
        dimension.name(),
        score
    );
    if let Some(notes) = notes.map(str::trim).filter(|n| !n.is_empty()) {
        prompt.push_str("\n\nAssessor notes:\n");
        prompt.push_str(notes);
    }
    prompt
}
