//! Model tier tags.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Functional description of the model a prompt should go to.
///
/// Some prompts are fine on a faster, cheaper model; others need the
/// stronger one. Routing on this tag happens outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageModelClassification {
    FastModel,
    SmartModel,
}

impl LanguageModelClassification {
    /// Wire tag, e.g. `"fast_model"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageModelClassification::FastModel => "fast_model",
            LanguageModelClassification::SmartModel => "smart_model",
        }
    }
}

impl std::fmt::Display for LanguageModelClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LanguageModelClassification {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fast_model" => Ok(LanguageModelClassification::FastModel),
            "smart_model" => Ok(LanguageModelClassification::SmartModel),
            _ => Err(Error::InvalidTag {
                kind: "model classification",
                value: s.to_string(),
            }),
        }
    }
}
