//! Persistent board store
//!
//! Applies transitions to the board and mirrors the full collection into a
//! [`TaskRepository`] after every change.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::task::{Task, TaskRepository};
use crate::Result;

use super::model::{Board, Outcome, Transition};

/// Board state plus its persisted mirror
pub struct BoardStore {
    board: Board,
    repository: Arc<dyn TaskRepository>,
}

impl BoardStore {
    /// Open the store, loading whatever the repository holds
    ///
    /// A repository that cannot be read yields an empty board.
    pub async fn open(repository: Arc<dyn TaskRepository>) -> Self {
        let tasks = match repository.load().await {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Starting with an empty board, failed to load tasks: {}", e);
                Vec::new()
            }
        };

        let mut board = Board::new();
        let outcome = board.apply(Transition::Load(tasks));
        debug!("Board opened: {:?}", outcome);

        Self { board, repository }
    }

    /// Get the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get a task by ID
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.board.get(id)
    }

    /// Apply a transition and persist the collection if it changed
    pub async fn dispatch(&mut self, transition: Transition) -> Result<Outcome> {
        let outcome = self.board.apply(transition);

        if outcome.is_change() {
            self.repository.save(self.board.tasks()).await?;
            info!("Board updated: {:?} ({} tasks)", outcome, self.board.len());
        } else {
            debug!("Transition left the board unchanged");
        }

        Ok(outcome)
    }
}
