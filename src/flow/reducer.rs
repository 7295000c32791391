//! Reducer trait for the unidirectional flow.

use super::intent::Intent;
use super::state::FlowState;

/// Reducer transforms screen state based on intents.
///
/// The reducer is the only place where a screen's state transitions
/// happen: field edits, settled submissions and slide advances all
/// pass through here. It must be a pure function:
/// (State, Intent) -> State
pub trait Reducer {
    /// The screen state type this reducer operates on.
    type State: FlowState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// No side effects: gateway calls and navigation happen in the
    /// controller around the dispatch, never in here.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
