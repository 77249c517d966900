//! Entries of a task's working memory.
//!
//! Memories come from many places (user notes, ability output, whatever a
//! planner decided to keep), so the shape is left open. Every variant still
//! serializes and still yields a one-line summary.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ability::Knowledge;

/// One working-memory entry.
///
/// Deserialization never drops data: an object only becomes `Knowledge`
/// when it serializes back to exactly the same object, otherwise it is
/// kept as a `Record`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Memory {
    /// Plain note.
    Text(String),
    /// Knowledge captured from an ability result.
    Knowledge(Knowledge),
    /// Arbitrary object.
    Record(Map<String, Value>),
    /// Any other JSON value.
    Other(Value),
}

impl Memory {
    /// One-line description of the entry.
    ///
    /// Records use their `summary` string, then their `content` string,
    /// then their compact JSON.
    pub fn summary(&self) -> String {
        match self {
            Memory::Text(text) => text.clone(),
            Memory::Knowledge(knowledge) => knowledge.content.clone(),
            Memory::Record(map) => ["summary", "content"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
            Memory::Other(value) => value.to_string(),
        }
    }
}

impl From<Value> for Memory {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Memory::Text(text),
            Value::Object(map) => {
                let doc = Value::Object(map.clone());
                match serde_json::from_value::<Knowledge>(doc.clone()) {
                    Ok(knowledge)
                        if serde_json::to_value(&knowledge).ok().as_ref() == Some(&doc) =>
                    {
                        Memory::Knowledge(knowledge)
                    }
                    _ => Memory::Record(map),
                }
            }
            other => Memory::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for Memory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Memory::from)
    }
}

impl From<String> for Memory {
    fn from(text: String) -> Self {
        Memory::Text(text)
    }
}

impl From<&str> for Memory {
    fn from(text: &str) -> Self {
        Memory::Text(text.to_string())
    }
}

impl From<Knowledge> for Memory {
    fn from(knowledge: Knowledge) -> Self {
        Memory::Knowledge(knowledge)
    }
}
