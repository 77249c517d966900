//! Task arena and parent links.
//!
//! Tasks refer to their parent by [`TaskId`]; the registry owns the tasks
//! and resolves those ids. Parent links are kept as a petgraph `DiGraph`
//! with edges running parent -> child, so a task can never become its own
//! ancestor.

use std::cmp::Ordering;
use std::collections::HashMap;

use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::core::context::TaskContext;
use crate::core::task::{Task, TaskId, TaskStatus};
use crate::error::{Error, Result};
use crate::{klog_debug, klog_warn};

/// Which end of the priority scale is scheduled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrder {
    /// Larger numbers are more urgent.
    #[default]
    HigherFirst,
    /// Smaller numbers are more urgent.
    LowerFirst,
}

impl PriorityOrder {
    /// Ordering that puts the more urgent of `a` and `b` first.
    pub fn compare(&self, a: i64, b: i64) -> Ordering {
        match self {
            PriorityOrder::HigherFirst => b.cmp(&a),
            PriorityOrder::LowerFirst => a.cmp(&b),
        }
    }
}

impl std::fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityOrder::HigherFirst => write!(f, "higher_first"),
            PriorityOrder::LowerFirst => write!(f, "lower_first"),
        }
    }
}

/// Owns tasks by id and tracks which task each context belongs under.
///
/// Tasks are keyed by their id, so stored tasks are only reachable mutably
/// through [`context_mut`](Self::context_mut). Parent links change through
/// [`attach`](Self::attach) and [`detach`](Self::detach).
pub struct TaskRegistry {
    graph: DiGraph<Task, ()>,
    task_index: HashMap<TaskId, NodeIndex>,
}

impl TaskRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            task_index: HashMap::new(),
        }
    }

    /// Add a task, wiring the parent its context already names.
    ///
    /// Inserting an id that is already registered leaves the registry
    /// unchanged and returns that id.
    ///
    /// # Errors
    /// - `TaskNotFound` if `context.parent` names an unregistered task
    /// - `Validation` if `context.parent` names the task itself
    pub fn insert(&mut self, task: Task) -> Result<TaskId> {
        let id = task.id;
        if self.task_index.contains_key(&id) {
            return Ok(id);
        }

        let parent_index = match task.context.parent {
            Some(parent) if parent == id => {
                return Err(Error::Validation(format!(
                    "Task {} cannot be its own parent",
                    id
                )));
            }
            Some(parent) => Some(self.index_of(&parent)?),
            None => None,
        };

        let index = self.graph.add_node(task);
        self.task_index.insert(id, index);
        if let Some(parent_index) = parent_index {
            self.graph.add_edge(parent_index, index, ());
        }
        klog_debug!("TaskRegistry::insert id={} tasks={}", id.short(), self.len());
        Ok(id)
    }

    /// Make `parent` the parent of `child`, replacing any previous parent.
    ///
    /// # Errors
    /// - `TaskNotFound` if either task is not registered
    /// - `Validation` if `child` is `parent` or one of its ancestors
    pub fn attach(&mut self, child: &TaskId, parent: &TaskId) -> Result<()> {
        let child_index = self.index_of(child)?;
        let parent_index = self.index_of(parent)?;

        if has_path_connecting(&self.graph, child_index, parent_index, None) {
            klog_warn!(
                "Rejected parent link {} -> {}: would create a cycle",
                parent.short(),
                child.short()
            );
            return Err(Error::Validation(format!(
                "Attaching task {} under {} would create a cycle",
                child, parent
            )));
        }

        self.clear_parent_edges(child_index);
        self.graph.add_edge(parent_index, child_index, ());
        self.graph[child_index].context.parent = Some(*parent);
        klog_debug!("Attached task {} under {}", child.short(), parent.short());
        Ok(())
    }

    /// Remove `child`'s parent link, returning the previous parent id.
    pub fn detach(&mut self, child: &TaskId) -> Result<Option<TaskId>> {
        let child_index = self.index_of(child)?;
        self.clear_parent_edges(child_index);
        let previous = self.graph[child_index].context.parent.take();
        if let Some(previous) = previous {
            klog_debug!("Detached task {} from {}", child.short(), previous.short());
        }
        Ok(previous)
    }

    /// Task registered under `id`.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.task_index
            .get(id)
            .and_then(|&index| self.graph.node_weight(index))
    }

    /// Mutable access to a registered task's context.
    ///
    /// `context.parent` must not be rewritten here; the graph edge would go
    /// stale. Use `attach` or `detach` instead.
    pub fn context_mut(&mut self, id: &TaskId) -> Option<&mut TaskContext> {
        let index = *self.task_index.get(id)?;
        self.graph
            .node_weight_mut(index)
            .map(|task| &mut task.context)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_index.contains_key(id)
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> Vec<&Task> {
        self.graph.node_weights().collect()
    }

    /// Parent of `id`, if it has one.
    pub fn parent_of(&self, id: &TaskId) -> Option<&Task> {
        let index = *self.task_index.get(id)?;
        self.graph
            .neighbors_directed(index, Direction::Incoming)
            .next()
            .and_then(|parent| self.graph.node_weight(parent))
    }

    /// Direct children of `id` in the order they were attached.
    pub fn children_of(&self, id: &TaskId) -> Vec<&Task> {
        let Some(&index) = self.task_index.get(id) else {
            return Vec::new();
        };
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .collect();
        // petgraph yields the newest edge first
        children.sort();
        children
            .into_iter()
            .filter_map(|child| self.graph.node_weight(child))
            .collect()
    }

    /// Ancestors of `id`, nearest first.
    pub fn lineage(&self, id: &TaskId) -> Vec<&Task> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(task) = current {
            ancestors.push(task);
            current = self.parent_of(&task.id);
        }
        ancestors
    }

    /// Tasks with no parent, in insertion order.
    pub fn roots(&self) -> Vec<&Task> {
        self.graph
            .node_indices()
            .filter(|&index| {
                self.graph
                    .neighbors_directed(index, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .filter_map(|index| self.graph.node_weight(index))
            .collect()
    }

    /// Tasks sorted by priority; ties keep insertion order.
    pub fn by_priority(&self, order: PriorityOrder) -> Vec<&Task> {
        let mut tasks = self.tasks();
        tasks.sort_by(|a, b| order.compare(a.priority, b.priority));
        tasks
    }

    /// Tasks currently in `status`, in insertion order.
    pub fn with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.graph
            .node_weights()
            .filter(|task| task.context.status == status)
            .collect()
    }

    fn index_of(&self, id: &TaskId) -> Result<NodeIndex> {
        self.task_index
            .get(id)
            .copied()
            .ok_or(Error::TaskNotFound(*id))
    }

    fn clear_parent_edges(&mut self, child_index: NodeIndex) {
        // remove_edge reindexes the last edge, so look each one up fresh
        loop {
            let edge = self
                .graph
                .edges_directed(child_index, Direction::Incoming)
                .next()
                .map(|edge| edge.id());
            match edge {
                Some(edge) => {
                    self.graph.remove_edge(edge);
                }
                None => break,
            }
        }
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistry")
            .field("tasks", &self.len())
            .field("links", &self.graph.edge_count())
            .finish()
    }
}
