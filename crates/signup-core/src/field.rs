//! # Form Fields and Field Errors
//!
//! The sign-up form has exactly four inputs. Every error the pipeline can
//! surface is a [`FieldError`] variant; its `Display` output is the exact
//! string the presentation layer renders.

use serde::{Deserialize, Serialize};

// ─── Field ───────────────────────────────────────────────────────────

/// One of the four sign-up form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Human-readable label used in "is missing" messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── FieldError ──────────────────────────────────────────────────────

/// A user-visible validation error for a single field.
///
/// At most one error is visible per field; "no error" is represented as
/// `Option::<FieldError>::None` and renders as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldError {
    /// The field is empty.
    Missing(Field),
    /// The email does not have the canonical `local@domain.tld` shape.
    InvalidEmail,
    /// The server reported the email as already registered.
    EmailTaken,
    /// The password does not satisfy the configured policy.
    PasswordPolicy,
    /// Password and confirmation differ.
    PasswordMismatch,
}

impl FieldError {
    /// The exact message rendered for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing(Field::Username) => "Username is missing",
            Self::Missing(Field::Email) => "Email is missing",
            Self::Missing(Field::Password) => "Password is missing",
            Self::Missing(Field::ConfirmPassword) => "Confirm Password is missing",
            Self::InvalidEmail => "Email is not valid",
            Self::EmailTaken => "Email is already used",
            Self::PasswordPolicy => "Password must be 8 characters",
            Self::PasswordMismatch => "Passwords do not match",
        }
    }

    /// Render an optional error the way the form displays it (`""` for none).
    pub fn render(error: Option<FieldError>) -> &'static str {
        error.map(|e| e.message()).unwrap_or("")
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
