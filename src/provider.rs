//! Message and function shapes exchanged with language-model providers.
//!
//! Only the data shape lives here; calling a provider is someone else's job.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Who authored a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MessageRole {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            _ => Err(Error::InvalidTag {
                kind: "message role",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageModelMessage {
    pub role: MessageRole,
    pub content: String,
}

impl LanguageModelMessage {
    /// Message with an explicit role.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// System-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// A function signature the model may call, carried as its JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageModelFunction {
    pub json_schema: serde_json::Value,
}

impl LanguageModelFunction {
    /// Wrap a JSON schema as-is.
    pub fn new(json_schema: serde_json::Value) -> Self {
        Self { json_schema }
    }

    /// The schema's `name` entry, if it has a string one.
    pub fn name(&self) -> Option<&str> {
        self.json_schema.get("name").and_then(|n| n.as_str())
    }
}
