//! Session gate
//!
//! Two states, [`SessionState::LoggedOut`] and [`SessionState::LoggedIn`].
//! Only a successful login enters LoggedIn; logout always leaves it.

use std::sync::Arc;
use tracing::{info, warn};

use super::client::{AuthResponse, Authenticator, Credentials};
use super::token::is_expired;
use crate::storage::{SlotStorage, TOKEN_SLOT};
use crate::Result;

/// Whether a usable session token is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored; the board may be shown
    LoggedIn,
    /// Nothing stored; `message` is meant for the login form
    Rejected { message: String },
}

/// Login/logout over a token slot
pub struct SessionGate {
    storage: Arc<dyn SlotStorage>,
    authenticator: Arc<dyn Authenticator>,
}

impl SessionGate {
    pub fn new(storage: Arc<dyn SlotStorage>, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            storage,
            authenticator,
        }
    }

    /// The stored token, if any
    pub async fn token(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(TOKEN_SLOT)
            .await?
            .filter(|t| !t.trim().is_empty()))
    }

    /// Current session state
    ///
    /// An expired JWT is cleared and reported as LoggedOut.
    pub async fn state(&self) -> Result<SessionState> {
        let Some(token) = self.token().await? else {
            return Ok(SessionState::LoggedOut);
        };

        if is_expired(&token) {
            info!("Stored session token has expired, clearing it");
            self.storage.remove(TOKEN_SLOT).await?;
            return Ok(SessionState::LoggedOut);
        }

        Ok(SessionState::LoggedIn)
    }

    /// Submit credentials once and store the token on success
    ///
    /// Endpoint refusals and transport failures both come back as
    /// [`LoginOutcome::Rejected`]; `Err` is reserved for failing to store
    /// the token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        let response = match self.authenticator.authenticate(credentials).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Login request failed: {}", e);
                return Ok(LoginOutcome::Rejected {
                    message: e.to_string(),
                });
            }
        };

        match response {
            AuthResponse::Granted { token } => {
                self.storage.set(TOKEN_SLOT, &token).await?;
                info!("Logged in as {}", credentials.username);
                Ok(LoginOutcome::LoggedIn)
            }
            AuthResponse::Denied { message } => {
                info!("Login rejected: {}", message);
                Ok(LoginOutcome::Rejected { message })
            }
        }
    }

    /// Forget the stored token; never contacts the endpoint
    pub async fn logout(&self) -> Result<()> {
        self.storage.remove(TOKEN_SLOT).await?;
        info!("Logged out");
        Ok(())
    }
}
