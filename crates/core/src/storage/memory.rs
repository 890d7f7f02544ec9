//! In-memory slot storage

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::SlotStorage;
use crate::Result;

/// Slot storage that lives only as long as the value
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStorage for MemorySlotStorage {
    async fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn set(&self, slot: &str, value: &str) -> Result<()> {
        self.slots
            .write()
            .await
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<()> {
        self.slots.write().await.remove(slot);
        Ok(())
    }
}
