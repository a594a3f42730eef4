//! State management modules for the demo screen.
//!
//! This module contains state-only logic (no UI concerns):
//! - Tasks state (task list, filter, counts)
//! - Theme state (theme manager, current theme)

mod tasks_state;
mod theme_state;

pub use tasks_state::{TasksFilter, TasksState};
pub use theme_state::ThemeState;
