//! Structured prompt payload for a language-model call.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::provider::{LanguageModelFunction, LanguageModelMessage};

/// Messages in conversational order plus the functions the model may call.
///
/// The `Display` form is what gets shown to, and logged for, the provider
/// call site: `ROLE: content` per message, entries separated by a blank line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageModelPrompt {
    pub messages: Vec<LanguageModelMessage>,
    #[serde(default)]
    pub functions: Vec<LanguageModelFunction>,
}

impl LanguageModelPrompt {
    /// Prompt with the given messages and no functions.
    pub fn new(messages: Vec<LanguageModelMessage>) -> Self {
        Self {
            messages,
            functions: Vec::new(),
        }
    }

    /// Replace the functions offered to the model.
    pub fn with_functions(mut self, functions: Vec<LanguageModelFunction>) -> Self {
        self.functions = functions;
        self
    }

    /// Append a message to the end of the conversation.
    pub fn push_message(&mut self, message: LanguageModelMessage) {
        self.messages.push(message);
    }

    /// Parse a prompt document, reporting shape problems as validation errors.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::invalid_document("prompt", e))
    }

    /// Human-readable transcript, one `ROLE: content` block per message.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for LanguageModelPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(
                f,
                "{}: {}",
                message.role.as_str().to_uppercase(),
                message.content
            )?;
        }
        Ok(())
    }
}
