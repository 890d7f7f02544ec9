//! Shared helpers for the integration tests

use std::sync::Arc;

use dashboard_core::session::{HttpAuthenticator, SessionGate};
use dashboard_core::storage::MemorySlotStorage;
use wiremock::MockServer;

/// Start a stub login endpoint
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A gate talking to `server`, plus the storage behind it
pub fn gate_for(server: &MockServer) -> (SessionGate, Arc<MemorySlotStorage>) {
    let storage = Arc::new(MemorySlotStorage::new());
    let gate = SessionGate::new(
        storage.clone(),
        Arc::new(HttpAuthenticator::new(server.uri())),
    );
    (gate, storage)
}
