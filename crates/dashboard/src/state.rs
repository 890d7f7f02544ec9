//! Application state

use std::sync::Arc;

use dashboard_core::board::BoardStore;
use dashboard_core::config::DashboardConfig;
use dashboard_core::session::{Authenticator, HttpAuthenticator, SessionGate};
use dashboard_core::storage::{FileSlotStorage, SlotStorage};
use dashboard_core::task::SlotTaskRepository;

/// Everything a command needs, wired from the configuration
pub struct AppState {
    storage: Arc<dyn SlotStorage>,
    gate: SessionGate,
}

impl AppState {
    /// Wire file storage and the HTTP login client from `config`
    pub fn new(config: &DashboardConfig) -> Self {
        tracing::debug!("Using data directory: {:?}", config.data_dir);
        let storage: Arc<dyn SlotStorage> = Arc::new(FileSlotStorage::new(&config.data_dir));
        let authenticator = Arc::new(HttpAuthenticator::new(config.auth_base_url.clone()));
        Self::with_parts(storage, authenticator)
    }

    /// Wire explicit storage and authenticator
    pub fn with_parts(
        storage: Arc<dyn SlotStorage>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let gate = SessionGate::new(storage.clone(), authenticator);
        Self { storage, gate }
    }

    /// Get reference to the session gate
    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    /// Load the board from storage
    pub async fn open_board(&self) -> BoardStore {
        let repository = Arc::new(SlotTaskRepository::new(self.storage.clone()));
        BoardStore::open(repository).await
    }
}
