//! # Form State and the Derivation Reducer
//!
//! [`FormInput`] holds what the user typed; [`EmailCheck`] holds where the
//! remote availability check stands. [`FormState::derive`] turns both into
//! the published snapshot. It is the only place that decides what each
//! error slot shows, so no two derivations ever race for the same slot.
//!
//! ## Email stages
//!
//! ```text
//! required ──▶ shape ──▶ server availability
//! "Email is missing"  "Email is not valid"  "Email is already used"
//! ```
//!
//! A later stage is only consulted when every earlier stage passes.

use signup_core::{is_valid_email, Field, FieldError, PasswordPolicy};

// ─── Inputs ──────────────────────────────────────────────────────────

/// One field's raw value plus whether the user has produced a value yet.
///
/// Errors are only shown for touched fields.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub value: String,
    pub touched: bool,
}

impl FieldInput {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Latest values of all four fields.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub username: FieldInput,
    pub email: FieldInput,
    pub password: FieldInput,
    pub confirm_password: FieldInput,
}

impl FormInput {
    pub fn field(&self, field: Field) -> &FieldInput {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldInput {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Both passwords are non-empty and identical.
    pub fn passwords_match(&self) -> bool {
        !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.password.value == self.confirm_password.value
    }
}

impl std::fmt::Debug for FormInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormInput")
            .field("username", &self.username.value)
            .field("email", &self.email.value)
            .field("password_len", &self.password.value.len())
            .field("confirm_password_len", &self.confirm_password.value.len())
            .finish()
    }
}

// ─── Email check ─────────────────────────────────────────────────────

/// Progress of the remote availability check for the current email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EmailCheck {
    /// The current email does not qualify for a check (empty or malformed).
    #[default]
    Idle,
    /// Waiting for the debounce window or the server response.
    Pending { email: String, generation: u64 },
    /// The server answered for `email`.
    Resolved { email: String, available: bool },
}

impl EmailCheck {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The server verdict for `email`, if one has landed.
    pub fn verdict_for(&self, email: &str) -> Option<bool> {
        match self {
            Self::Resolved { email: checked, available } if checked == email => Some(*available),
            _ => None,
        }
    }
}

// ─── Published snapshot ──────────────────────────────────────────────

/// Everything the presentation layer renders for the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username_error: Option<FieldError>,
    pub email_error: Option<FieldError>,
    pub password_error: Option<FieldError>,
    pub confirm_password_error: Option<FieldError>,
    /// All four gates hold: username present, email confirmed available,
    /// password valid, confirmation matches.
    pub can_submit: bool,
    /// An email availability check is scheduled or in flight.
    pub email_check_pending: bool,
}

impl FormState {
    /// Recompute every derived value from the current inputs.
    pub fn derive(input: &FormInput, check: &EmailCheck, policy: PasswordPolicy) -> Self {
        let username_valid = !input.username.is_empty();
        let email_shape_valid = !input.email.is_empty() && is_valid_email(&input.email.value);
        let email_verdict = if email_shape_valid {
            check.verdict_for(&input.email.value)
        } else {
            None
        };
        let password_valid =
            !input.password.is_empty() && policy.accepts(&input.password.value);
        let passwords_match = input.passwords_match();

        Self {
            username_error: visible(&input.username, || {
                (!username_valid).then_some(FieldError::Missing(Field::Username))
            }),
            email_error: visible(&input.email, || {
                if input.email.is_empty() {
                    Some(FieldError::Missing(Field::Email))
                } else if !email_shape_valid {
                    Some(FieldError::InvalidEmail)
                } else if email_verdict == Some(false) {
                    Some(FieldError::EmailTaken)
                } else {
                    None
                }
            }),
            password_error: visible(&input.password, || {
                if input.password.is_empty() {
                    Some(FieldError::Missing(Field::Password))
                } else if !password_valid {
                    Some(FieldError::PasswordPolicy)
                } else {
                    None
                }
            }),
            confirm_password_error: visible(&input.confirm_password, || {
                if input.confirm_password.is_empty() {
                    Some(FieldError::Missing(Field::ConfirmPassword))
                } else if !input.password.is_empty() && !passwords_match {
                    Some(FieldError::PasswordMismatch)
                } else {
                    None
                }
            }),
            can_submit: username_valid
                && email_verdict == Some(true)
                && password_valid
                && passwords_match,
            email_check_pending: check.is_pending(),
        }
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Username => self.username_error,
            Field::Email => self.email_error,
            Field::Password => self.password_error,
            Field::ConfirmPassword => self.confirm_password_error,
        }
    }

    /// The rendered error string for `field` (`""` when there is none).
    pub fn message(&self, field: Field) -> &'static str {
        FieldError::render(self.error(field))
    }
}

fn visible(input: &FieldInput, error: impl FnOnce() -> Option<FieldError>) -> Option<FieldError> {
    if input.touched {
        error()
    } else {
        None
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn username_error_iff_empty(s in ".*") {
            let mut input = FormInput::default();
            input.username = FieldInput { value: s.clone(), touched: true };
            let state = FormState::derive(&input, &EmailCheck::Idle, PasswordPolicy::Permissive);
            prop_assert_eq!(state.message(Field::Username).is_empty(), !s.is_empty());
        }

        #[test]
        fn can_submit_requires_matching_passwords(a in "[a-z]{1,12}", b in "[a-z]{1,12}") {
            let input = FormInput {
                username: FieldInput { value: "alice".into(), touched: true },
                email: FieldInput { value: "alice@example.com".into(), touched: true },
                password: FieldInput { value: a.clone(), touched: true },
                confirm_password: FieldInput { value: b.clone(), touched: true },
            };
            let check = EmailCheck::Resolved { email: "alice@example.com".into(), available: true };
            let state = FormState::derive(&input, &check, PasswordPolicy::Permissive);
            prop_assert_eq!(state.can_submit, a == b);
        }
    }
}
