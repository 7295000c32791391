//! Core logic of the app shell: field validation, form submission
//! state, the mock authentication gateway, the onboarding sequencer
//! and the navigation decision table.
//!
//! Nothing here renders. The out-of-scope UI layer owns one controller
//! per screen, forwards user actions to it, and applies the returned
//! [`nav::Transition`] to its navigation primitive. All state is held
//! in explicit value types, so the whole flow is testable without any
//! rendering technology.

pub mod auth;
pub mod config;
pub mod flow;
pub mod form;
pub mod nav;
pub mod onboarding;
pub mod validate;

pub use auth::{AuthGateway, MockAuthGateway, SessionResult};
pub use config::Config;
pub use form::{FormController, SignInController, SignUpController, SubmitOutcome};
pub use nav::{NavHistory, Route, Transition};
pub use onboarding::OnboardingController;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{transition, Screen};
    use crate::validate::Field;
    use std::sync::Arc;

    /// Make `RUST_LOG` work when running the journey tests.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Full journey: onboarding → skip → failed sign-in → corrected
    /// sign-in → home, driving a real history stack throughout.
    #[tokio::test(start_paused = true)]
    async fn skip_onboarding_then_sign_in_reaches_home() {
        init_tracing();
        let config = Config::default();
        let gateway = Arc::new(MockAuthGateway::from_config(&config.auth));
        let mut history = NavHistory::default();
        assert_eq!(history.current(), Route::Onboarding);

        let mut onboarding = OnboardingController::new();
        history.apply(onboarding.skip());
        assert_eq!(history.current(), Route::SignIn);

        let mut sign_in: SignInController = FormController::new(gateway);
        sign_in.set_field(Field::Email, "demo@venust.app");
        sign_in.set_field(Field::Password, "wrong1");

        let outcome = sign_in.submit().await;
        if let Some(event) = outcome.screen_event() {
            history.apply(transition(Screen::SignIn, event));
        }
        assert_eq!(history.current(), Route::SignIn);
        assert!(sign_in.state().root_error.is_some());

        sign_in.set_field(Field::Password, "123456");
        assert!(sign_in.state().root_error.is_none());

        let outcome = sign_in.submit().await;
        if let Some(event) = outcome.screen_event() {
            history.apply(transition(Screen::SignIn, event));
        }
        assert_eq!(history.current(), Route::Home);
        // Auth replaced the route, so there is nothing to go back to.
        assert_eq!(history.depth(), 1);
    }

    /// Full journey through registration, including the cross-link
    /// from sign-in.
    #[tokio::test(start_paused = true)]
    async fn create_account_from_sign_in_and_register() {
        init_tracing();
        let gateway = Arc::new(MockAuthGateway::default());
        let mut history = NavHistory::new(Route::SignIn);

        history.apply(transition(Screen::SignIn, nav::ScreenEvent::CreateAccountTapped));
        assert_eq!(history.current(), Route::SignUp);

        let mut sign_up: SignUpController = FormController::new(gateway);
        sign_up.set_field(Field::Name, "Ana Lima");
        sign_up.set_field(Field::Email, "ana@exemplo.com");
        sign_up.set_field(Field::Password, "segredo1");

        let outcome = sign_up.submit().await;
        let event = outcome.screen_event().expect("submission settled");
        history.apply(transition(Screen::SignUp, event));
        assert_eq!(history.current(), Route::Home);
    }
}
