//! State for one form screen.

use crate::flow::FlowState;
use crate::form::values::FormValues;
use crate::validate::{Field, FieldErrors};

/// Value type owned by exactly one form controller per screen, and
/// discarded when the screen unmounts.
///
/// Field-level errors re-derive live from `values`, but are only
/// surfaced once the user has attempted a submission at least once;
/// the root error is a per-submission banner cleared by any edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<V: FormValues> {
    pub values: V,
    /// Number of settled submission attempts. Never decreases.
    pub submit_count: u32,
    /// True while a gateway call is in flight.
    pub is_submitting: bool,
    /// Form-level banner from the last failed submission.
    pub root_error: Option<String>,
    /// Password rendered in clear text when true. View preference,
    /// owned here like everything else the screen displays.
    pub show_password: bool,
}

impl<V: FormValues> FlowState for FormState<V> {}

impl<V: FormValues> FormState<V> {
    /// True iff every field validates and no submission is in flight.
    ///
    /// The controller enforces this before invoking the gateway, so at
    /// most one submission per form instance is ever in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.values.validate().is_empty()
    }

    /// The displayable error for one field, if any.
    ///
    /// Withheld entirely until the first submit attempt has settled.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        if self.submit_count == 0 {
            return None;
        }
        self.values.validate().get(field)
    }

    /// All currently displayable field errors.
    pub fn visible_errors(&self) -> FieldErrors {
        if self.submit_count == 0 {
            return FieldErrors::new();
        }
        self.values.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::validate;

    #[test]
    fn default_state_cannot_submit() {
        let state = FormState::<Credentials>::default();
        assert!(!state.can_submit());
        assert_eq!(state.submit_count, 0);
        assert!(!state.is_submitting);
        assert!(state.root_error.is_none());
    }

    #[test]
    fn short_password_blocks_submit_regardless_of_email() {
        let mut state = FormState::<Credentials>::default();
        state.values.email = "demo@venust.app".to_string();
        state.values.password = "12345".to_string();
        assert!(!state.can_submit());

        state.values.password = "123456".to_string();
        assert!(state.can_submit());
    }

    #[test]
    fn in_flight_submission_blocks_submit() {
        let mut state = FormState::<Credentials>::default();
        state.values.email = "demo@venust.app".to_string();
        state.values.password = "123456".to_string();
        state.is_submitting = true;
        assert!(!state.can_submit());
    }

    #[test]
    fn field_errors_withheld_before_first_attempt() {
        let mut state = FormState::<Credentials>::default();
        assert_eq!(state.field_error(Field::Email), None);
        assert!(state.visible_errors().is_empty());

        state.submit_count = 1;
        assert_eq!(
            state.field_error(Field::Email),
            Some(validate::EMAIL_MESSAGE)
        );
        assert_eq!(state.visible_errors().len(), 2);
    }

    #[test]
    fn field_errors_rederive_live_once_visible() {
        let mut state = FormState::<Credentials>::default();
        state.submit_count = 1;
        assert!(state.field_error(Field::Password).is_some());

        state.values.password = "123456".to_string();
        assert_eq!(state.field_error(Field::Password), None);
    }
}
