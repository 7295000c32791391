//! Form state machine shared by the sign-in and sign-up screens.
//!
//! One [`FormController`] instance per screen owns a [`FormState`];
//! the rendering layer calls [`FormController::set_field`] and
//! [`FormController::submit`] and reads `can_submit`, `is_submitting`,
//! per-field errors and the root error back off the state. The
//! "disabled submit" contract is enforced here, not in the view.

mod controller;
mod intent;
mod reducer;
mod state;
mod values;

pub use controller::{
    FormController, SignInController, SignUpController, SubmitOutcome, GENERIC_ERROR_MESSAGE,
};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::FormState;
pub use values::FormValues;
