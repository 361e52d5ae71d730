/// Normalized evidence for one dimension, exactly one kind per scoring pass.
/// Document text has already been folded into the narrative by intake.
#[derive(Debug, Clone, PartialEq)]
pub enum Evidence {
    Manual {
        answers: Vec<bool>,
        notes: Option<String>,
    },
    Narrative {
        text: String,
    },
}

impl Evidence {
    pub fn is_narrative(&self) -> bool {
        matches!(self, Evidence::Narrative { .. })
    }
}
