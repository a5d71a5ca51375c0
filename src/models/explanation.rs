use serde::{Deserialize, Serialize};

/// Title of the single record that wraps a raw model response
pub const AI_EXPLANATIONS_TITLE: &str = "AI_explanations";

/// Why a candidate was recommended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Explanation {
    pub title: String,
    pub explanation: String,
}

impl Explanation {
    pub fn new(title: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
        }
    }

    /// Wraps the unparsed text returned by the completion service
    pub fn from_model_output(text: impl Into<String>) -> Self {
        Self::new(AI_EXPLANATIONS_TITLE, text)
    }
}
