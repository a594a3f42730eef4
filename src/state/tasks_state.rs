//! Task list and filter state.

use serde::{Deserialize, Serialize};

use crate::io::Task;

/// Which tasks the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TasksFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TasksFilter {
    pub const ALL: [TasksFilter; 3] = [Self::All, Self::Active, Self::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Active => "Active Tasks",
            Self::Completed => "Completed Tasks",
        }
    }

    /// Message shown when the filter matches nothing.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::All => "You have no tasks!",
            Self::Active => "You have no active tasks!",
            Self::Completed => "You have no completed tasks!",
        }
    }

    pub fn empty_icon(&self) -> &'static str {
        match self {
            Self::All => "📋",
            Self::Active => "✅",
            Self::Completed => "🗒",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.is_active(),
            Self::Completed => task.completed,
        }
    }
}

/// The task list as last fetched, with local edits applied.
#[derive(Debug, Clone, Default)]
pub struct TasksState {
    tasks: Vec<Task>,
    filter: TasksFilter,
}

impl TasksState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with freshly fetched tasks.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn filter(&self) -> TasksFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TasksFilter) {
        self.filter = filter;
    }

    /// Tasks matching the current filter.
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        let filter = self.filter;
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    pub fn has_visible(&self) -> bool {
        self.visible().next().is_some()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Flips completion of task `id`. Returns false if there is no such task.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Removes completed tasks and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        before - self.tasks.len()
    }
}
