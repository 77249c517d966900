pub mod ability;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod provider;

pub use ability::{AbilityResult, ContentType, Knowledge};
pub use crate::core::{
    LanguageModelClassification, LanguageModelPrompt, Memory, PriorityOrder, Task, TaskContext,
    TaskId, TaskRegistry, TaskStatus, TaskType,
};
pub use error::{Error, Result};
pub use provider::{LanguageModelFunction, LanguageModelMessage, MessageRole};
