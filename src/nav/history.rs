//! Minimal navigation history stack.

use crate::nav::transition::{Route, Transition};

/// The `push`/`replace`/`back` primitive the transition table is
/// applied to. The stack is never empty: `back` at the root stays at
/// the root (closing the app is the platform's concern, not ours).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHistory {
    stack: Vec<Route>,
}

impl Default for NavHistory {
    /// Starts at onboarding, the shell's initial route.
    fn default() -> Self {
        Self::new(Route::Onboarding)
    }
}

impl NavHistory {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    /// The route currently on screen.
    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::NotFound)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Swap the current route without growing history.
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
    }

    /// Return to the previous route, or stay if already at the root.
    pub fn back(&mut self) -> Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    /// Apply a transition decision and return the resulting route.
    pub fn apply(&mut self, transition: Transition) -> Route {
        match transition {
            Transition::Stay => {}
            Transition::Push(route) => self.push(route),
            Transition::Replace(route) => self.replace(route),
            Transition::Back => {
                self.back();
            }
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_onboarding() {
        let history = NavHistory::default();
        assert_eq!(history.current(), Route::Onboarding);
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn push_grows_and_back_returns() {
        let mut history = NavHistory::default();
        history.push(Route::SignIn);
        history.push(Route::SignUp);
        assert_eq!(history.current(), Route::SignUp);
        assert_eq!(history.depth(), 3);

        assert_eq!(history.back(), Route::SignIn);
        assert_eq!(history.back(), Route::Onboarding);
    }

    #[test]
    fn replace_does_not_grow_history() {
        let mut history = NavHistory::default();
        history.replace(Route::SignIn);
        assert_eq!(history.current(), Route::SignIn);
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn back_at_root_stays() {
        let mut history = NavHistory::default();
        assert_eq!(history.back(), Route::Onboarding);
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn apply_covers_every_transition() {
        let mut history = NavHistory::default();
        assert_eq!(history.apply(Transition::Stay), Route::Onboarding);
        assert_eq!(history.apply(Transition::Push(Route::SignUp)), Route::SignUp);
        assert_eq!(history.apply(Transition::Back), Route::Onboarding);
        assert_eq!(
            history.apply(Transition::Replace(Route::SignIn)),
            Route::SignIn
        );
        assert_eq!(history.depth(), 1);
    }
}
