//! Task module
//!
//! This module contains the task model and its persistence.

mod model;
mod repository;
mod slot_store;

pub use model::*;
pub use repository::TaskRepository;
pub use slot_store::SlotTaskRepository;
