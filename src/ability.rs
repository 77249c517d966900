//! Outcome records produced by ability execution.
//!
//! These are appended to a task's history as-is; nothing in this crate
//! interprets them beyond rendering a summary line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of content carried by a piece of [`Knowledge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Code,
}

/// Something an ability learned that is worth remembering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Knowledge {
    pub content: String,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub content_metadata: serde_json::Map<String, serde_json::Value>,
}

impl Knowledge {
    /// Knowledge in prose form.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentType::Text,
            content_metadata: serde_json::Map::new(),
        }
    }

    /// Knowledge that is source code.
    pub fn code(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentType::Code,
            content_metadata: serde_json::Map::new(),
        }
    }
}

/// Result of running one ability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityResult {
    pub ability_name: String,
    /// Arguments the ability ran with; ordered by key.
    #[serde(default)]
    pub ability_args: BTreeMap<String, String>,
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_knowledge: Option<Knowledge>,
}

impl AbilityResult {
    /// Create a result with no arguments and no new knowledge.
    pub fn new(ability_name: impl Into<String>, success: bool, message: impl Into<String>) -> Self {
        Self {
            ability_name: ability_name.into(),
            ability_args: BTreeMap::new(),
            success,
            message: message.into(),
            new_knowledge: None,
        }
    }

    /// Add one argument the ability ran with.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ability_args.insert(key.into(), value.into());
        self
    }

    pub fn with_knowledge(mut self, knowledge: Knowledge) -> Self {
        self.new_knowledge = Some(knowledge);
        self
    }

    /// One-line rendering: `name(k=v, ...): message`.
    pub fn summary(&self) -> String {
        let args = self
            .ability_args
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}): {}", self.ability_name, args, self.message)
    }
}
