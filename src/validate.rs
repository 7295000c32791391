//! Field validation predicates and per-field error messages.
//!
//! Pure functions, no side effects. Screens never call these directly;
//! form values aggregate them into a [`FieldErrors`] map and the form
//! state decides when a message is actually shown (only after the
//! first submit attempt).

use std::collections::BTreeMap;

/// Identifier for a validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Minimum password length. The UI hints at a number and a special
/// character on top, but only the length is enforced.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum name length after trimming.
pub const MIN_NAME_LEN: usize = 2;

pub const EMAIL_MESSAGE: &str = "Informe um e-mail válido.";
pub const PASSWORD_MESSAGE: &str = "A senha deve ter pelo menos 6 caracteres.";
pub const NAME_MESSAGE: &str = "O nome deve ter pelo menos 2 caracteres.";

/// Check an email address against the shape `local@domain.tld`.
///
/// The input is trimmed first. Accepts exactly one `@`, a non-empty
/// local part, and a domain containing an interior dot; whitespace is
/// rejected anywhere. Deliberately permissive beyond that — the mock
/// gateway, not the validator, decides whether an address is known.
pub fn is_valid_email(s: &str) -> bool {
    let s = s.trim();
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if local.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }
    if domain.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }
    // Interior dot: at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Check password length. No upper bound, no character-class rules.
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LEN
}

/// Check a display name: at least two characters after trimming.
pub fn is_valid_name(s: &str) -> bool {
    s.trim().chars().count() >= MIN_NAME_LEN
}

/// Map from failing field to its user-facing message.
///
/// Schema-style validation result: contains an entry for every field
/// that fails, and nothing else. Empty means the values are valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }
}
