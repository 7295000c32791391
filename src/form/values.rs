//! Field values owned by a form, and how each payload validates and
//! submits itself through the gateway seam.

use crate::auth::{AuthGateway, Credentials, GatewayError, RegistrationInput, SessionResult};
use crate::validate::{self, Field, FieldErrors};

/// The value set of one form screen.
///
/// Implemented by the transient gateway payloads directly, so form
/// state is just "the payload plus submission bookkeeping".
#[async_trait::async_trait]
pub trait FormValues: Clone + PartialEq + Default + Send + Sync + 'static {
    /// Fields this form renders, in display order.
    fn fields() -> &'static [Field];

    /// Overwrite one field. Unknown fields are ignored.
    fn set(&mut self, field: Field, value: String);

    /// Read one field back. `None` for fields this form doesn't have.
    fn get(&self, field: Field) -> Option<&str>;

    /// Schema-style validation: one entry per failing field.
    fn validate(&self) -> FieldErrors;

    /// Submit the normalized values through the gateway.
    async fn authenticate(&self, gateway: &dyn AuthGateway)
        -> Result<SessionResult, GatewayError>;
}

#[async_trait::async_trait]
impl FormValues for Credentials {
    fn fields() -> &'static [Field] {
        &[Field::Email, Field::Password]
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            // Sign-in has no name field.
            Field::Name => {}
        }
    }

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Name => None,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !validate::is_valid_email(&self.email) {
            errors.insert(Field::Email, validate::EMAIL_MESSAGE);
        }
        if !validate::is_valid_password(&self.password) {
            errors.insert(Field::Password, validate::PASSWORD_MESSAGE);
        }
        errors
    }

    async fn authenticate(
        &self,
        gateway: &dyn AuthGateway,
    ) -> Result<SessionResult, GatewayError> {
        // Email is normalized here; the password travels exactly as typed.
        let payload = Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        gateway.sign_in(&payload).await
    }
}

#[async_trait::async_trait]
impl FormValues for RegistrationInput {
    fn fields() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Password]
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !validate::is_valid_name(&self.name) {
            errors.insert(Field::Name, validate::NAME_MESSAGE);
        }
        if !validate::is_valid_email(&self.email) {
            errors.insert(Field::Email, validate::EMAIL_MESSAGE);
        }
        if !validate::is_valid_password(&self.password) {
            errors.insert(Field::Password, validate::PASSWORD_MESSAGE);
        }
        errors
    }

    async fn authenticate(
        &self,
        gateway: &dyn AuthGateway,
    ) -> Result<SessionResult, GatewayError> {
        let payload = RegistrationInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        gateway.sign_up(&payload).await
    }
}
