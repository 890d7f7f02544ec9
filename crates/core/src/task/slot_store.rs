//! Slot-backed task repository
//!
//! Stores the task collection as a JSON array in a single storage slot.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::model::Task;
use super::repository::TaskRepository;
use crate::storage::{SlotStorage, TASKS_SLOT};
use crate::Result;

/// Task repository mirroring the collection into one slot
#[derive(Clone)]
pub struct SlotTaskRepository {
    storage: Arc<dyn SlotStorage>,
    slot: String,
}

impl SlotTaskRepository {
    /// Create a repository using the tasks slot
    pub fn new(storage: Arc<dyn SlotStorage>) -> Self {
        Self {
            storage,
            slot: TASKS_SLOT.to_string(),
        }
    }
}

#[async_trait]
impl TaskRepository for SlotTaskRepository {
    async fn load(&self) -> Result<Vec<Task>> {
        let Some(content) = self.storage.get(&self.slot).await? else {
            debug!("No persisted tasks in slot {}", self.slot);
            return Ok(Vec::new());
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                warn!("Ignoring malformed task data in slot {}: {}", self.slot, e);
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string(tasks)?;
        self.storage.set(&self.slot, &content).await
    }
}
