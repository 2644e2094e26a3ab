//! Client-side task list state.
//!
//! Entries are only removed or replaced after the server confirmed the
//! change; this type does not issue requests itself.

use crate::board::{BoardTask, TaskBoard};
use crate::types::{DbId, Deadline};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListState<T> {
    tasks: Vec<T>,
}

impl<T> Default for TaskListState<T> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<T: BoardTask> TaskListState<T> {
    pub fn new(tasks: Vec<T>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[T] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: DbId) -> Option<&T> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Remove the entry with `id`, returning it. Other entries keep their order.
    pub fn remove(&mut self, id: DbId) -> Option<T> {
        let index = self.tasks.iter().position(|t| t.id() == id)?;
        Some(self.tasks.remove(index))
    }

    /// Replace the entry with the same id, or append when absent.
    pub fn upsert(&mut self, task: T) {
        match self.tasks.iter_mut().find(|t| t.id() == task.id()) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
    }

    pub fn board(&self, today: Deadline) -> TaskBoard {
        TaskBoard::build(&self.tasks, today)
    }
}
