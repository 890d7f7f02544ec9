//! Named-slot storage
//!
//! The dashboard keeps its state in a handful of named slots, each holding
//! one string value. Writes replace the whole value.

mod file;
mod memory;

use async_trait::async_trait;

use crate::Result;

pub use file::FileSlotStorage;
pub use memory::MemorySlotStorage;

/// Slot holding the serialized task collection
pub const TASKS_SLOT: &str = "dashboard_tasks";

/// Slot holding the session token
pub const TOKEN_SLOT: &str = "jwt_token";

/// Key/value storage addressed by slot name
#[async_trait]
pub trait SlotStorage: Send + Sync {
    /// Read a slot, `None` if it was never written or has been removed
    async fn get(&self, slot: &str) -> Result<Option<String>>;

    /// Replace the value of a slot
    async fn set(&self, slot: &str, value: &str) -> Result<()>;

    /// Remove a slot; removing a missing slot is not an error
    async fn remove(&self, slot: &str) -> Result<()>;
}
