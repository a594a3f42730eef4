//! Where tasks come from.
//!
//! `TaskSource` is the seam between the screen and its data. The demo ships a
//! single implementation, `SimulatedRemote`, which behaves like a slow and
//! occasionally unreliable network service.

use rand::Rng;
use std::ops::Range;
use std::thread;
use std::time::Duration;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Failures a task source can report.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Remote unavailable after {latency_ms} ms")]
    Unavailable { latency_ms: u64 },
}

/// A blocking source of tasks, called from a background thread.
pub trait TaskSource: Send + Sync {
    /// Fetches the full task list.
    fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError>;
}

const TITLES: &[&str] = &[
    "Buy groceries",
    "Walk the dog",
    "Call the plumber",
    "Renew passport",
    "Water the plants",
    "Book dentist appointment",
    "Fix the bike tyre",
    "Pay electricity bill",
    "Clean the gutters",
    "Write thank-you notes",
    "Back up photos",
    "Return library books",
];

/// A fake remote that sleeps for a random latency and sometimes fails.
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    task_count: usize,
    latency_ms: Range<u64>,
    failure_rate: f64,
}

impl SimulatedRemote {
    pub fn new(task_count: usize) -> Self {
        Self {
            task_count,
            latency_ms: 400..1600,
            failure_rate: 0.1,
        }
    }

    /// Sets the latency range in milliseconds.
    pub fn with_latency(mut self, latency_ms: Range<u64>) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Sets the probability (0..=1) that a fetch fails.
    ///
    /// A NaN rate is ignored and the current rate kept.
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        if failure_rate.is_nan() {
            tracing::warn!(failure_rate, "ignoring invalid failure rate");
        } else {
            self.failure_rate = failure_rate.clamp(0.0, 1.0);
        }
        self
    }

    fn generate(&self, rng: &mut impl Rng) -> Vec<Task> {
        (0..self.task_count)
            .map(|i| {
                let title = TITLES[i % TITLES.len()];
                let mut task = Task::new(i as u64 + 1, title, format!("Task #{} from the remote", i + 1));
                task.completed = rng.gen_bool(0.3);
                task
            })
            .collect()
    }
}

impl TaskSource for SimulatedRemote {
    fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError> {
        let mut rng = rand::thread_rng();
        let latency_ms = if self.latency_ms.is_empty() {
            self.latency_ms.start
        } else {
            rng.gen_range(self.latency_ms.clone())
        };
        thread::sleep(Duration::from_millis(latency_ms));

        if rng.gen_bool(self.failure_rate) {
            return Err(FetchError::Unavailable { latency_ms });
        }

        let tasks = self.generate(&mut rng);
        tracing::debug!(count = tasks.len(), latency_ms, "remote returned tasks");
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_requested_count() {
        let remote = SimulatedRemote::new(5).with_latency(0..0).with_failure_rate(0.0);
        let tasks = remote.fetch_tasks().unwrap();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[4].id, 5);
    }

    #[test]
    fn test_always_failing_remote() {
        let remote = SimulatedRemote::new(5).with_latency(0..0).with_failure_rate(1.0);
        let err = remote.fetch_tasks().unwrap_err();
        assert_eq!(err.to_string(), "Remote unavailable after 0 ms");
    }

    #[test]
    fn test_nan_failure_rate_is_ignored() {
        let remote = SimulatedRemote::new(2).with_latency(0..0).with_failure_rate(0.0);
        let remote = remote.with_failure_rate(f64::NAN);
        assert_eq!(remote.fetch_tasks().unwrap().len(), 2);

        let remote = SimulatedRemote::new(2).with_latency(0..0).with_failure_rate(f64::INFINITY);
        assert!(remote.fetch_tasks().is_err());
    }

    #[test]
    fn test_zero_tasks() {
        let remote = SimulatedRemote::new(0).with_latency(0..0).with_failure_rate(0.0);
        assert!(remote.fetch_tasks().unwrap().is_empty());
    }
}
