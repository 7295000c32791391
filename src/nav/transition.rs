//! The routing decision table.

use serde::{Deserialize, Serialize};

/// Navigable screens of the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Onboarding,
    SignIn,
    SignUp,
    /// Root of the tabbed home/search/profile shell.
    Home,
    NotFound,
}

/// The screen an event originated on.
///
/// Onboarding carries the one bit the table needs: whether the current
/// slide is the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    Onboarding { last_slide: bool },
    NotFound,
}

/// Flow outcomes and user taps that drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// A settled gateway call opened a session.
    AuthSucceeded,
    /// A settled gateway call was rejected; the root error is shown.
    AuthFailed,
    CreateAccountTapped,
    HaveAccountTapped,
    Continue,
    Skip,
    GoHome,
    Back,
}

/// What the navigation primitive should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Remain on the current screen.
    Stay,
    Push(Route),
    Replace(Route),
    /// Return to the previous screen in history.
    Back,
}

/// Decide the next screen for an event.
///
/// Transitions are immediate, with no intermediate pending screen.
/// Events a screen does not define fall through to [`Transition::Stay`].
pub fn transition(screen: Screen, event: ScreenEvent) -> Transition {
    use ScreenEvent::*;

    let decision = match (screen, event) {
        (Screen::SignIn, AuthSucceeded) => Transition::Replace(Route::Home),
        (Screen::SignIn, AuthFailed) => Transition::Stay,
        (Screen::SignIn, CreateAccountTapped) => Transition::Push(Route::SignUp),

        (Screen::SignUp, AuthSucceeded) => Transition::Replace(Route::Home),
        (Screen::SignUp, AuthFailed) => Transition::Stay,
        (Screen::SignUp, HaveAccountTapped) => Transition::Push(Route::SignIn),

        // The sequencer advances the slide index; the table only
        // decides when onboarding is left.
        (Screen::Onboarding { last_slide: false }, Continue) => Transition::Stay,
        (Screen::Onboarding { last_slide: true }, Continue) => Transition::Replace(Route::SignIn),
        (Screen::Onboarding { .. }, Skip) => Transition::Replace(Route::SignIn),
        (Screen::Onboarding { .. }, CreateAccountTapped) => Transition::Push(Route::SignUp),

        (Screen::NotFound, GoHome) => Transition::Replace(Route::Onboarding),
        (Screen::NotFound, Back) => Transition::Back,

        _ => Transition::Stay,
    };

    tracing::debug!(?screen, ?event, ?decision, "navigation decision");
    decision
}
