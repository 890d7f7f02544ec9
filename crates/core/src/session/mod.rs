//! Login session management
//!
//! The session gate stores the token issued by the remote login endpoint
//! and decides whether the board may be shown.

mod client;
mod gate;
mod token;

pub use client::{AuthResponse, Authenticator, Credentials, HttpAuthenticator};
pub use gate::{LoginOutcome, SessionGate, SessionState};
pub use token::is_expired;
