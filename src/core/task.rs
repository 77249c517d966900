//! Task data model.
//!
//! A task is the unit of work a planner hands out. It is a passive record:
//! the planner and executor advance its status and grow its history by
//! writing to the public fields of its [`TaskContext`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::context::TaskContext;
use crate::error::{Error, Result};

/// Unique identifier for a task.
///
/// Uses UUID v4 for generation and provides a short form display
/// for human-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new unique task identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return first 8 characters of the UUID for display.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Kind of work a task asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Research,
    Write,
    Edit,
    Code,
    Design,
    Test,
    Plan,
}

impl TaskType {
    pub const ALL: [TaskType; 7] = [
        TaskType::Research,
        TaskType::Write,
        TaskType::Edit,
        TaskType::Code,
        TaskType::Design,
        TaskType::Test,
        TaskType::Plan,
    ];

    /// Wire tag, as models are asked to write it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Research => "research",
            TaskType::Write => "write",
            TaskType::Edit => "edit",
            TaskType::Code => "code",
            TaskType::Design => "design",
            TaskType::Test => "test",
            TaskType::Plan => "plan",
        }
    }

    /// Lenient match for model-written text such as `" Research"` or `"CODE"`.
    pub fn coerce(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for TaskType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidTag {
                kind: "task type",
                value: s.to_string(),
            })
    }
}

/// Task status in its lifecycle.
///
/// Tasks move `backlog -> ready -> in_progress -> done`. Nothing here
/// enforces that; the helpers only describe the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Known but not yet ready to be worked on.
    #[default]
    Backlog,
    /// Ready criteria satisfied.
    Ready,
    /// Being worked on.
    InProgress,
    /// Acceptance criteria satisfied.
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Backlog,
        TaskStatus::Ready,
        TaskStatus::InProgress,
        TaskStatus::Done,
    ];

    /// Wire tag used in task documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::Ready => "ready",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// The following state in the chain, `None` once done.
    pub fn next(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Backlog => Some(TaskStatus::Ready),
            TaskStatus::Ready => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Done),
            TaskStatus::Done => None,
        }
    }

    /// Check if the status is `Done`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    /// True only for the immediate successor; no skipping, no going back.
    pub fn can_advance_to(&self, other: TaskStatus) -> bool {
        self.next() == Some(other)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| Error::InvalidTag {
                kind: "task status",
                value: s.to_string(),
            })
    }
}

/// A unit of work with an objective, a priority, and readiness and
/// acceptance criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Generated when a document does not carry one.
    #[serde(default)]
    pub id: TaskId,
    pub objective: String,
    /// Free text rather than [`TaskType`]: models do not reliably stick to
    /// the enum. Use [`Task::task_type`] for a best-effort classification.
    #[serde(rename = "type")]
    pub task_type: String,
    /// Direction (higher or lower first) is the scheduler's call.
    pub priority: i64,
    pub ready_criteria: Vec<String>,
    pub acceptance_criteria: Vec<String>,
    #[serde(default)]
    pub context: TaskContext,
}

impl Task {
    /// Create a task with a fresh id and a default context.
    pub fn new(
        objective: impl Into<String>,
        task_type: impl Into<String>,
        priority: i64,
        ready_criteria: Vec<String>,
        acceptance_criteria: Vec<String>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            objective: objective.into(),
            task_type: task_type.into(),
            priority,
            ready_criteria,
            acceptance_criteria,
            context: TaskContext::default(),
        }
    }

    /// Parse a task document, reporting shape problems as validation errors.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::invalid_document("task", e))
    }

    /// Like [`Task::from_json`], for an already-parsed document.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::invalid_document("task", e))
    }

    /// Best-effort classification of the free-text type.
    pub fn task_type(&self) -> Option<TaskType> {
        TaskType::coerce(&self.task_type)
    }

    /// Current lifecycle status, read from the context.
    pub fn status(&self) -> TaskStatus {
        self.context.status
    }
}
