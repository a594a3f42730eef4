//! Asynchronous task fetching.
//!
//! Runs a `TaskSource` on a background thread so the GUI keeps painting (and
//! the refresh indicator keeps spinning) while the fetch is in flight.

use anyhow::Context as _;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use crate::io::{LoadingState, Task, TaskSource};

/// Result of polling the loader.
pub enum LoadResult {
    /// Fetch completed
    Success(Vec<Task>),
    /// Fetch failed with an error
    Error(String),
    /// Still fetching, or nothing was started
    None,
}

/// Runs at most one fetch at a time and hands results back to the UI thread.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for the running fetch
    loading_receiver: Option<Receiver<Result<Vec<Task>, String>>>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
        }
    }

    fn lock_state(state: &Mutex<LoadingState>) -> MutexGuard<'_, LoadingState> {
        state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Checks if a fetch is currently in progress.
    pub fn is_loading(&self) -> bool {
        Self::lock_state(&self.loading_state).in_progress
    }

    /// Starts fetching from `source` on a background thread.
    ///
    /// Returns false without starting anything if a fetch is already running.
    /// Call `check_completion()` once per frame to collect the result.
    pub fn start_refresh(&mut self, source: Arc<dyn TaskSource>, ctx: &egui::Context) -> bool {
        {
            let mut state = Self::lock_state(&self.loading_state);
            if state.in_progress {
                tracing::debug!("refresh already in flight, ignoring request");
                return false;
            }
            state.in_progress = true;
        }

        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = source
                .fetch_tasks()
                .context("Failed to refresh tasks")
                .map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            Self::lock_state(&loading_state).in_progress = false;

            // Wake the GUI so it picks up the result
            ctx_handle.request_repaint();
        });

        tracing::info!("refresh started");
        true
    }

    /// Returns the result of the last fetch once it is available.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.loading_receiver = None;
                match result {
                    Ok(tasks) => {
                        tracing::info!(count = tasks.len(), "refresh finished");
                        LoadResult::Success(tasks)
                    }
                    Err(error_msg) => {
                        tracing::warn!(error = %error_msg, "refresh failed");
                        LoadResult::Error(error_msg)
                    }
                }
            }
            Err(TryRecvError::Empty) => LoadResult::None,
            Err(TryRecvError::Disconnected) => {
                // The fetch thread died without reporting
                self.loading_receiver = None;
                Self::lock_state(&self.loading_state).in_progress = false;
                let error_msg = "Refresh stopped unexpectedly".to_string();
                tracing::error!(error = %error_msg, "fetch thread exited without a result");
                LoadResult::Error(error_msg)
            }
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
