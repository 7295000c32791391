//! Intents for the onboarding sequencer.

use crate::flow::Intent;

#[derive(Debug, Clone, Copy)]
pub enum OnboardingIntent {
    /// Advance one slide. On the last slide the index stays put; the
    /// controller turns the action into the terminal transition.
    Continue,
    /// Leave onboarding early. Never mutates the index.
    Skip,
}

impl Intent for OnboardingIntent {}
