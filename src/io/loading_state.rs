//! Shared flag for the background fetch.

/// Holds whether a fetch is running.
///
/// Only the in_progress flag is shared; results come through a channel.
/// Wrapped in an `Arc<Mutex<>>` so the UI thread and the fetch thread can both
/// see it.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True while a fetch is in flight
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}
