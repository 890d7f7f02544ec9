//! Task repository trait
//!
//! Defines the interface for persisting the task collection.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for the whole task collection
///
/// The collection is always read and written wholesale.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Load the persisted collection, empty if nothing usable is stored
    async fn load(&self) -> Result<Vec<Task>>;

    /// Replace the persisted collection
    async fn save(&self, tasks: &[Task]) -> Result<()>;
}
