//! State for the onboarding screen.

use crate::flow::FlowState;
use crate::onboarding::slides::{Slide, SLIDES};

/// Bounded linear position in the slide list.
///
/// Invariant: `index < SLIDES.len()`. The index is monotonic within a
/// session — it only ever advances, and the terminal "begin"/skip
/// actions leave the screen instead of wrapping or resetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnboardingState {
    index: usize,
}

impl FlowState for OnboardingState {}

impl OnboardingState {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        SLIDES.len()
    }

    /// The slide currently shown.
    pub fn slide(&self) -> &'static Slide {
        &SLIDES[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == SLIDES.len() - 1
    }

    /// Display-only completion fraction, `(index + 1) / total`.
    pub fn progress_fraction(&self) -> f64 {
        (self.index + 1) as f64 / SLIDES.len() as f64
    }

    /// The `1/3`-style step label the header renders.
    pub fn step_label(&self) -> String {
        format!("{}/{}", self.index + 1, SLIDES.len())
    }

    pub(crate) fn advanced(self) -> Self {
        // Clamp at the last slide; leaving is a navigation decision.
        Self {
            index: (self.index + 1).min(SLIDES.len() - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_first_slide() {
        let state = OnboardingState::default();
        assert_eq!(state.index(), 0);
        assert_eq!(state.total(), 3);
        assert_eq!(state.slide().key, "demo");
        assert!(!state.is_last());
    }

    #[test]
    fn progress_is_one_based() {
        let state = OnboardingState::default();
        assert!((state.progress_fraction() - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(state.step_label(), "1/3");

        let state = state.advanced().advanced();
        assert!((state.progress_fraction() - 1.0).abs() < f64::EPSILON);
        assert_eq!(state.step_label(), "3/3");
    }

    #[test]
    fn advancing_clamps_at_the_last_slide() {
        let state = OnboardingState::default().advanced().advanced();
        assert!(state.is_last());
        assert_eq!(state.advanced().index(), 2);
    }
}
