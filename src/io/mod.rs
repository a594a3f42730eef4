//! Task fetching: the remote source and the background loader.

pub mod loading_state;
pub mod task_source;
pub mod async_loader;

pub use loading_state::LoadingState;
pub use task_source::{FetchError, SimulatedRemote, Task, TaskSource};
pub use async_loader::{AsyncLoader, LoadResult};
