//! The async submit boundary for one form screen.

use std::mem;
use std::sync::Arc;

use crate::auth::{AuthGateway, AuthUser, Credentials, RegistrationInput, SessionResult};
use crate::flow::Reducer;
use crate::form::intent::FormIntent;
use crate::form::reducer::FormReducer;
use crate::form::state::FormState;
use crate::form::values::FormValues;
use crate::nav::ScreenEvent;
use crate::validate::Field;

/// Generic banner for unexpected gateway failures. Credential
/// rejections carry their own message; this one covers everything the
/// taxonomy calls "unexpected".
pub const GENERIC_ERROR_MESSAGE: &str = "Algo deu errado. Tente novamente.";

/// What a call to [`FormController::submit`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The `can_submit` gate failed; nothing happened, the gateway was
    /// not invoked and the submit count did not change.
    Ignored,
    /// The gateway opened a session.
    Authenticated { user: AuthUser },
    /// The gateway rejected the submission; the root error is set.
    Rejected,
}

impl SubmitOutcome {
    /// The navigation event a settled submission drives, if any.
    pub fn screen_event(&self) -> Option<ScreenEvent> {
        match self {
            SubmitOutcome::Authenticated { .. } => Some(ScreenEvent::AuthSucceeded),
            SubmitOutcome::Rejected => Some(ScreenEvent::AuthFailed),
            SubmitOutcome::Ignored => None,
        }
    }
}

/// Owns the [`FormState`] of one screen and the gateway seam.
///
/// The rendering layer calls the methods here synchronously (submit is
/// the one suspension point) and re-reads [`FormController::state`]
/// after each call.
pub struct FormController<V: FormValues> {
    state: FormState<V>,
    gateway: Arc<dyn AuthGateway>,
}

/// Controller for the sign-in screen.
pub type SignInController = FormController<Credentials>;

/// Controller for the sign-up screen.
pub type SignUpController = FormController<RegistrationInput>;

impl<V: FormValues> FormController<V> {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            state: FormState::default(),
            gateway,
        }
    }

    pub fn state(&self) -> &FormState<V> {
        &self.state
    }

    /// Overwrite one field value.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormIntent::SetField {
            field,
            value: value.into(),
        });
    }

    pub fn toggle_show_password(&mut self) {
        self.dispatch(FormIntent::ToggleShowPassword);
    }

    /// Attempt a submission.
    ///
    /// A no-op unless [`FormState::can_submit`] holds, which also
    /// guarantees at most one in-flight gateway call per form
    /// instance. Unexpected gateway failures never escape: they settle
    /// the form with [`GENERIC_ERROR_MESSAGE`] as the root error.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.state.can_submit() {
            tracing::debug!(
                is_submitting = self.state.is_submitting,
                "submit ignored by can_submit gate"
            );
            return SubmitOutcome::Ignored;
        }

        self.dispatch(FormIntent::SubmitStarted);

        let values = self.state.values.clone();
        let result = match values.authenticate(self.gateway.as_ref()).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "unexpected gateway failure during submit");
                SessionResult::Failure {
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                }
            }
        };

        let outcome = match &result {
            SessionResult::Success { user } => SubmitOutcome::Authenticated { user: user.clone() },
            SessionResult::Failure { .. } => SubmitOutcome::Rejected,
        };

        self.dispatch(FormIntent::SubmitSettled { result });
        outcome
    }

    fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::<V>::reduce(mem::take(&mut self.state), intent);
    }
}
