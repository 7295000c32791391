//! Authentication data model and the gateway seam.
//!
//! The gateway is the single extension point of the core: the rest of
//! the crate only sees [`AuthGateway`], so the bundled mock can be
//! replaced by a real backend without touching the form controller.

mod mock;

pub use mock::{MockAuthGateway, DEFAULT_LATENCY, INVALID_CREDENTIALS_MESSAGE};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sign-in payload. Created transiently per submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload. Created transiently per submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The authenticated identity a successful session carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
}

/// Outcome of a settled gateway call.
///
/// Credential rejection is data, not an error: the screen stays put
/// and renders the message as a root-level banner. [`GatewayError`] is
/// reserved for unexpected failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SessionResult {
    Success { user: AuthUser },
    Failure { message: String },
}

impl SessionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Unexpected failures inside a gateway implementation.
///
/// Never produced by the mock in normal operation; a real backend maps
/// transport and server errors here. The form controller converts any
/// variant into a generic root error so the screen never crashes.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("Unexpected gateway failure: {message}")]
    Unexpected { message: String },
}

/// The single accepted credential pair of the mock gateway.
///
/// Injectable configuration data (see the `config` module), not a
/// compiled-in literal at call sites; the default is only the demo
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    /// Display name echoed back on successful sign-in.
    pub display_name: String,
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: "demo@venust.app".to_string(),
            password: "123456".to_string(),
            display_name: "Usuário Demo".to_string(),
        }
    }
}

/// Asynchronous credential verification seam.
///
/// Both calls suspend for however long the backend takes (the mock
/// simulates a fixed latency) and settle exactly once. Controllers
/// hold `Arc<dyn AuthGateway>` so implementations can be swapped.
#[async_trait::async_trait]
pub trait AuthGateway: Send + Sync {
    /// Verify credentials and open a session.
    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionResult, GatewayError>;

    /// Register a new account.
    async fn sign_up(&self, input: &RegistrationInput) -> Result<SessionResult, GatewayError>;
}
