//! Reducer for the onboarding sequencer.

use crate::flow::Reducer;
use crate::onboarding::intent::OnboardingIntent;
use crate::onboarding::state::OnboardingState;

pub struct OnboardingReducer;

impl Reducer for OnboardingReducer {
    type State = OnboardingState;
    type Intent = OnboardingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OnboardingIntent::Continue => {
                if state.is_last() {
                    // Terminal action: the index never reaches total.
                    state
                } else {
                    state.advanced()
                }
            }
            OnboardingIntent::Skip => state,
        }
    }
}
