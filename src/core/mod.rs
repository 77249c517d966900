//! Planning records: tasks, their working memory, and model prompts.
//!
//! Tasks own their context by value; a context names its parent task by
//! id, and [`TaskRegistry`] resolves those ids.

pub mod classification;
pub mod context;
pub mod memory;
pub mod prompt;
pub mod registry;
pub mod task;

pub use classification::LanguageModelClassification;
pub use context::TaskContext;
pub use memory::Memory;
pub use prompt::LanguageModelPrompt;
pub use registry::{PriorityOrder, TaskRegistry};
pub use task::{Task, TaskId, TaskStatus, TaskType};
