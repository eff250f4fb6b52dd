//! Ordered task collection.
//!
//! # Invariants
//! - Task ids are unique across the collection.
//! - Order is insertion order; the only mutations are append and
//!   status replacement.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collection-level invariant failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    DuplicateId(TaskId),
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
        }
    }
}

impl Error for CollectionError {}

/// Tasks in display order. Serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TryFrom<Vec<Task>> for TaskCollection {
    type Error = CollectionError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(CollectionError::DuplicateId(task.id));
            }
        }
        Ok(Self { tasks })
    }
}

impl From<TaskCollection> for Vec<Task> {
    fn from(collection: TaskCollection) -> Self {
        collection.tasks
    }
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a new collection with `task` appended at the end.
    pub fn appended(&self, task: Task) -> Result<Self, CollectionError> {
        if self.contains(task.id) {
            return Err(CollectionError::DuplicateId(task.id));
        }
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Ok(Self { tasks })
    }

    /// Returns a new collection with the status of `id` flipped.
    ///
    /// Returns `None` when no task matches `id`.
    pub fn toggled(&self, id: TaskId) -> Option<Self> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let mut tasks = self.tasks.clone();
        tasks[index] = tasks[index].toggled();
        Some(Self { tasks })
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
