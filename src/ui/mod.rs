//! UI panel rendering for the demo
//!
//! - Header panel (filter, refresh, clear completed, theme selector)
//! - Task list (the loading content widget around the task rows)
//! - Status bar (task counts, last refresh error)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod task_list;
pub mod status_bar;
pub mod panel_manager;
