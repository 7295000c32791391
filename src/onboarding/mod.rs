//! Onboarding sequencer: a bounded linear index over a fixed ordered
//! list of slides, plus the terminal transition into the auth flow.

mod controller;
mod intent;
mod reducer;
mod slides;
mod state;

pub use controller::OnboardingController;
pub use intent::OnboardingIntent;
pub use reducer::OnboardingReducer;
pub use slides::{Slide, SLIDES};
pub use state::OnboardingState;
