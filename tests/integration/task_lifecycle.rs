//! Task and context lifecycle tests.
//!
//! A planner parses tasks from model output, then advances their contexts
//! in place. These tests walk that path end to end.

use serde_json::json;

use kanso::{Memory, Task, TaskStatus, TaskType};

use crate::fixtures::{search_result, task_document, test_task};

#[test]
fn test_task_without_context_starts_in_backlog() {
    let task = Task::from_value(task_document("Write release notes", "write", 2)).unwrap();

    assert_eq!(task.context.status, TaskStatus::Backlog);
    assert_eq!(task.context.cycle_count, 0);
    assert!(task.context.memories.is_empty());
    assert_eq!(task.task_type(), Some(TaskType::Write));
}

#[test]
fn test_task_without_priority_is_rejected() {
    let mut doc = task_document("Write release notes", "write", 2);
    doc.as_object_mut().unwrap().remove("priority");

    let err = Task::from_value(doc).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_task_with_archived_status_is_rejected() {
    let mut doc = task_document("Write release notes", "write", 2);
    doc["context"] = json!({"status": "archived"});

    let err = Task::from_value(doc).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_model_output_with_loose_type_still_validates() {
    let task = Task::from_value(task_document("Sketch the UI", "Design ", 1)).unwrap();
    assert_eq!(task.task_type(), Some(TaskType::Design));

    let task = Task::from_value(task_document("Meditate", "contemplate", 1)).unwrap();
    assert_eq!(task.task_type(), None);
    assert_eq!(task.task_type, "contemplate");
}

#[test]
fn test_planner_walks_status_chain() {
    let mut task = test_task("Implement parser", 5);
    let mut seen = vec![task.context.status];

    while let Some(next) = task.context.status.next() {
        assert!(task.context.status.can_advance_to(next));
        task.context.status = next;
        task.context.cycle_count += 1;
        seen.push(next);
    }

    assert_eq!(
        seen,
        vec![
            TaskStatus::Backlog,
            TaskStatus::Ready,
            TaskStatus::InProgress,
            TaskStatus::Done
        ]
    );
    assert!(task.context.status.is_terminal());
    assert_eq!(task.context.cycle_count, 3);
}

#[test]
fn test_prior_actions_grow_by_one_in_order() {
    let mut task = test_task("Research crates", 3);

    for (i, query) in ["serde", "petgraph", "thiserror"].iter().enumerate() {
        let before = task.context.prior_actions.clone();
        task.context.prior_actions.push(search_result(query));

        assert_eq!(task.context.prior_actions.len(), i + 1);
        assert_eq!(&task.context.prior_actions[..i], &before[..]);
    }

    let summaries: Vec<String> = task
        .context
        .prior_actions
        .iter()
        .map(|a| a.summary())
        .collect();
    assert_eq!(
        summaries,
        vec![
            "web_search(query=serde): 3 results for serde",
            "web_search(query=petgraph): 3 results for petgraph",
            "web_search(query=thiserror): 3 results for thiserror",
        ]
    );
}

#[test]
fn test_context_collects_knowledge_as_memories() {
    let mut task = test_task("Research crates", 3);
    let result = search_result("uuid");

    if let Some(knowledge) = result.new_knowledge.clone() {
        task.context.memories.push(Memory::from(knowledge));
    }
    task.context.prior_actions.push(result);
    task.context.user_input.push("prefer maintained crates".to_string());
    task.context.supplementary_info.push("MSRV is 1.70".to_string());
    task.context.enough_info = true;

    assert_eq!(task.context.memories[0].summary(), "notes on uuid");
    assert!(task.context.enough_info);
}

#[test]
fn test_task_document_survives_a_round_trip() {
    let mut task = test_task("Edit chapter two", 2);
    task.context.status = TaskStatus::InProgress;
    task.context.prior_actions.push(search_result("style guide"));
    task.context.memories.push(Memory::from("keep British spelling"));

    let json = serde_json::to_string_pretty(&task).unwrap();
    let parsed = Task::from_json(&json).unwrap();

    assert_eq!(parsed, task);
    assert!(json.contains("\"in_progress\""));
    assert!(json.contains("\"type\": \"code\""));
}
