//! Reducer for the form state machine.

use std::marker::PhantomData;

use crate::auth::SessionResult;
use crate::flow::Reducer;
use crate::form::intent::FormIntent;
use crate::form::state::FormState;
use crate::form::values::FormValues;

/// Pure state transitions for one form screen.
///
/// Side effects (the gateway call, navigation) are handled by the
/// controller around the dispatch call.
pub struct FormReducer<V: FormValues> {
    _values: PhantomData<V>,
}

impl<V: FormValues> Reducer for FormReducer<V> {
    type State = FormState<V>;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetField { field, value } => {
                state.values.set(field, value);
                state.root_error = None;
            }

            FormIntent::ToggleShowPassword => {
                state.show_password = !state.show_password;
            }

            FormIntent::SubmitStarted => {
                state.is_submitting = true;
            }

            FormIntent::SubmitSettled { result } => {
                state.is_submitting = false;
                state.submit_count += 1;
                state.root_error = match result {
                    SessionResult::Failure { message } => Some(message),
                    SessionResult::Success { .. } => None,
                };
            }
        }
        state
    }
}
