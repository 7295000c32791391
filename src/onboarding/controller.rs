//! Controller glue between the sequencer and the transition table.

use crate::flow::Reducer;
use crate::nav::{transition, Screen, ScreenEvent, Transition};
use crate::onboarding::intent::OnboardingIntent;
use crate::onboarding::reducer::OnboardingReducer;
use crate::onboarding::state::OnboardingState;

/// Owns the [`OnboardingState`] of one screen instance.
///
/// Each handler decides the navigation transition first (the decision
/// depends on the pre-action slide) and then advances the sequencer.
#[derive(Debug, Default)]
pub struct OnboardingController {
    state: OnboardingState,
}

impl OnboardingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    /// "Continuar" / "Começar" button.
    pub fn continue_pressed(&mut self) -> Transition {
        let decision = transition(self.screen(), ScreenEvent::Continue);
        self.dispatch(OnboardingIntent::Continue);
        decision
    }

    /// "Pular" link. Works from any slide.
    pub fn skip(&mut self) -> Transition {
        let decision = transition(self.screen(), ScreenEvent::Skip);
        self.dispatch(OnboardingIntent::Skip);
        decision
    }

    /// "Criar conta" shortcut straight into sign-up.
    pub fn create_account(&self) -> Transition {
        transition(self.screen(), ScreenEvent::CreateAccountTapped)
    }

    fn screen(&self) -> Screen {
        Screen::Onboarding {
            last_slide: self.state.is_last(),
        }
    }

    fn dispatch(&mut self, intent: OnboardingIntent) {
        self.state = OnboardingReducer::reduce(self.state, intent);
    }
}
