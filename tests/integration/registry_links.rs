//! Registry tests: parent resolution and ordering across a task tree.

use kanso::{PriorityOrder, TaskStatus};

use crate::fixtures::{planned_tree, test_task};

#[test]
fn test_context_parent_resolves_through_registry() {
    let (registry, tree) = planned_tree();

    let test_task = registry.get(&tree.test).unwrap();
    let parent_id = test_task.context.parent.unwrap();
    assert_eq!(parent_id, tree.implement);
    assert_eq!(
        registry.get(&parent_id).unwrap().objective,
        "Implement the feature"
    );

    let lineage: Vec<_> = registry.lineage(&tree.test).iter().map(|t| t.id).collect();
    assert_eq!(lineage, vec![tree.implement, tree.root]);
}

#[test]
fn test_cannot_make_root_a_child_of_its_grandchild() {
    let (mut registry, tree) = planned_tree();

    let err = registry.attach(&tree.root, &tree.test).unwrap_err();
    assert!(err.is_validation());
    assert!(registry.get(&tree.root).unwrap().context.parent.is_none());
    assert_eq!(registry.roots().len(), 1);
}

#[test]
fn test_moving_a_subtree() {
    let (mut registry, tree) = planned_tree();

    registry.attach(&tree.implement, &tree.research).unwrap();

    let lineage: Vec<_> = registry.lineage(&tree.test).iter().map(|t| t.id).collect();
    assert_eq!(lineage, vec![tree.implement, tree.research, tree.root]);
    assert_eq!(registry.children_of(&tree.root).len(), 1);
}

#[test]
fn test_scheduler_chooses_priority_direction() {
    let (registry, _) = planned_tree();

    let higher: Vec<i64> = registry
        .by_priority(PriorityOrder::HigherFirst)
        .iter()
        .map(|t| t.priority)
        .collect();
    let mut lower: Vec<i64> = registry
        .by_priority(PriorityOrder::LowerFirst)
        .iter()
        .map(|t| t.priority)
        .collect();

    assert_eq!(higher, vec![5, 4, 3, 1]);
    lower.reverse();
    assert_eq!(lower, higher);
}

#[test]
fn test_ready_queue_from_status() {
    let (mut registry, tree) = planned_tree();
    for id in [tree.research, tree.implement] {
        registry.context_mut(&id).unwrap().status = TaskStatus::Ready;
    }
    let extra = registry.insert(test_task("Write docs", 2)).unwrap();
    registry.attach(&extra, &tree.root).unwrap();

    let ready: Vec<_> = registry
        .with_status(TaskStatus::Ready)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ready, vec![tree.research, tree.implement]);
    assert_eq!(registry.with_status(TaskStatus::Backlog).len(), 3);
}
