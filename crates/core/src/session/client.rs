//! Login endpoint client
//!
//! One `POST /login` per attempt, JSON in and JSON out. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::Result;

/// Login credentials, sent as the request body
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Endpoint verdict on a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResponse {
    /// Credentials accepted; carries the issued token
    Granted { token: String },
    /// Credentials refused; carries the server's message
    Denied { message: String },
}

#[derive(Debug, Default, Deserialize)]
struct LoginResponseBody {
    #[serde(default)]
    jwt_token: Option<String>,
    #[serde(default)]
    error_msg: Option<String>,
}

/// Something that can check credentials
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Submit credentials once
    ///
    /// `Err` means the endpoint could not be reached or read; a refusal
    /// is `Ok(AuthResponse::Denied)`.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse>;
}

/// Authenticator talking to the remote login endpoint
pub struct HttpAuthenticator {
    client: Client,
    base_url: String,
}

impl HttpAuthenticator {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::builder().build().unwrap_or_else(|_| Client::new()),
            base_url,
        }
    }

    /// Full URL of the login endpoint
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let url = self.login_url();
        info!("Submitting login for {} to {}", credentials.username, url);

        let res = self.client.post(&url).json(credentials).send().await?;
        let status = res.status();
        let text = res.text().await?;
        debug!("Login endpoint answered {}", status);

        let body: LoginResponseBody = serde_json::from_str(&text).unwrap_or_default();

        if status.is_success() {
            match body.jwt_token.filter(|t| !t.trim().is_empty()) {
                Some(token) => Ok(AuthResponse::Granted { token }),
                None => Ok(AuthResponse::Denied {
                    message: "Login response did not include a token".to_string(),
                }),
            }
        } else {
            let message = body
                .error_msg
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("Login failed with status {}", status));
            Ok(AuthResponse::Denied { message })
        }
    }
}
