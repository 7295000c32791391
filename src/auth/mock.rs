//! Mock gateway simulating a network round-trip.
//!
//! No persisted state: every process restart forgets everything except
//! the one configured account. Sign-up always succeeds by design — it
//! echoes the submitted identity back without any uniqueness check.

use std::time::Duration;

use crate::auth::{
    AuthGateway, AuthUser, Credentials, DemoAccount, GatewayError, RegistrationInput,
    SessionResult,
};
use crate::config::AuthConfig;

/// Simulated round-trip latency applied to every call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(650);

/// Fixed user-facing message for rejected credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "E-mail ou senha inválidos para a conta demo.";

/// In-process stand-in for a real authentication backend.
///
/// Accepts exactly one account: email compared trimmed and
/// case-insensitively, password compared exactly.
#[derive(Debug, Clone)]
pub struct MockAuthGateway {
    account: DemoAccount,
    latency: Duration,
}

impl MockAuthGateway {
    pub fn new(account: DemoAccount, latency: Duration) -> Self {
        Self { account, latency }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.demo.clone(), Duration::from_millis(config.latency_ms))
    }

    fn matches(&self, credentials: &Credentials) -> bool {
        let email = credentials.email.trim();
        email.eq_ignore_ascii_case(&self.account.email)
            && credentials.password == self.account.password
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self::new(DemoAccount::default(), DEFAULT_LATENCY)
    }
}

#[async_trait::async_trait]
impl AuthGateway for MockAuthGateway {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionResult, GatewayError> {
        tokio::time::sleep(self.latency).await;

        if self.matches(credentials) {
            tracing::debug!(email = %self.account.email, "mock sign-in accepted");
            Ok(SessionResult::Success {
                user: AuthUser {
                    name: self.account.display_name.clone(),
                    email: self.account.email.clone(),
                },
            })
        } else {
            tracing::debug!("mock sign-in rejected");
            Ok(SessionResult::Failure {
                message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            })
        }
    }

    async fn sign_up(&self, input: &RegistrationInput) -> Result<SessionResult, GatewayError> {
        tokio::time::sleep(self.latency).await;

        // No uniqueness or persistence check: every registration
        // succeeds and echoes the submitted identity back.
        tracing::debug!(email = %input.email.trim(), "mock sign-up accepted");
        Ok(SessionResult::Success {
            user: AuthUser {
                name: input.name.trim().to_string(),
                email: input.email.trim().to_string(),
            },
        })
    }
}
