//! Working memory attached to a task.

use serde::{Deserialize, Serialize};

use crate::ability::AbilityResult;
use crate::core::memory::Memory;
use crate::core::task::{TaskId, TaskStatus};
use crate::error::{Error, Result};

/// Mutable state a planner accumulates while working a task.
///
/// Every field is public and written in place by the planner or executor;
/// there are no transition methods here. `parent` names the owning task by
/// id; resolve it through a [`TaskRegistry`](crate::core::registry::TaskRegistry).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskContext {
    /// Planning/execution cycles spent so far.
    #[serde(default)]
    pub cycle_count: u64,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub parent: Option<TaskId>,
    /// Append-only history, oldest first.
    #[serde(default)]
    pub prior_actions: Vec<AbilityResult>,
    #[serde(default)]
    pub memories: Vec<Memory>,
    #[serde(default)]
    pub user_input: Vec<String>,
    #[serde(default)]
    pub supplementary_info: Vec<String>,
    /// Whether the context is judged sufficient to proceed.
    #[serde(default)]
    pub enough_info: bool,
}

impl TaskContext {
    /// Fresh backlog context with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a context document, reporting shape problems as validation errors.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::invalid_document("task context", e))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::invalid_document("task context", e))
    }

    /// Most recent ability result, if any.
    pub fn last_action(&self) -> Option<&AbilityResult> {
        self.prior_actions.last()
    }
}
