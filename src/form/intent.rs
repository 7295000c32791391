//! Intents for the form state machine.

use crate::auth::SessionResult;
use crate::flow::Intent;
use crate::validate::Field;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// User edited a field. Clears any pending root error — an edit
    /// signals correction of the last failure.
    SetField { field: Field, value: String },
    /// User toggled password visibility.
    ToggleShowPassword,
    /// The controller accepted a submission; gateway call in flight.
    SubmitStarted,
    /// The gateway call settled. Unexpected gateway errors have
    /// already been converted to a generic failure by the controller.
    SubmitSettled { result: SessionResult },
}

impl Intent for FormIntent {}
