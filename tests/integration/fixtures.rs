//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Task documents shaped like model output
//! - A small planned-out task tree
//! - Ability results and prompts

use serde_json::{json, Value};

use kanso::{
    AbilityResult, Knowledge, LanguageModelMessage, LanguageModelPrompt, Task, TaskId,
    TaskRegistry,
};

/// A task document with all five required fields and no context.
pub fn task_document(objective: &str, task_type: &str, priority: i64) -> Value {
    json!({
        "objective": objective,
        "type": task_type,
        "priority": priority,
        "ready_criteria": ["inputs gathered"],
        "acceptance_criteria": ["output reviewed"]
    })
}

pub fn test_task(objective: &str, priority: i64) -> Task {
    Task::from_value(task_document(objective, "code", priority)).expect("fixture task is valid")
}

/// Ids of the tasks in [`planned_tree`].
pub struct PlannedTree {
    pub root: TaskId,
    pub research: TaskId,
    pub implement: TaskId,
    pub test: TaskId,
}

/// root
/// ├── research (p=3)
/// └── implement (p=5)
///     └── test (p=4)
pub fn planned_tree() -> (TaskRegistry, PlannedTree) {
    let mut registry = TaskRegistry::new();
    let root = registry
        .insert(test_task("Ship the feature", 1))
        .expect("insert root");
    let research = registry
        .insert(test_task("Research prior art", 3))
        .expect("insert research");
    let implement = registry
        .insert(test_task("Implement the feature", 5))
        .expect("insert implement");
    let test = registry
        .insert(test_task("Test the feature", 4))
        .expect("insert test");

    registry.attach(&research, &root).expect("attach research");
    registry.attach(&implement, &root).expect("attach implement");
    registry.attach(&test, &implement).expect("attach test");

    (
        registry,
        PlannedTree {
            root,
            research,
            implement,
            test,
        },
    )
}

pub fn search_result(query: &str) -> AbilityResult {
    AbilityResult::new("web_search", true, format!("3 results for {}", query))
        .with_arg("query", query)
        .with_knowledge(Knowledge::text(format!("notes on {}", query)))
}

pub fn planning_prompt() -> LanguageModelPrompt {
    LanguageModelPrompt::new(vec![
        LanguageModelMessage::system("You are a planning agent."),
        LanguageModelMessage::user("Break the objective into tasks."),
    ])
}
