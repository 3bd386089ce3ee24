//! Password policy.

use serde::{Deserialize, Serialize};

/// Rule a non-empty password must satisfy before the form can submit.
///
/// The backend has not published a policy yet, so the default accepts any
/// non-empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PasswordPolicy {
    /// Every non-empty password passes.
    #[default]
    Permissive,
    /// At least this many characters (Unicode scalar values).
    MinLength(usize),
}

impl PasswordPolicy {
    /// Whether `password` satisfies the policy.
    pub fn accepts(&self, password: &str) -> bool {
        match self {
            Self::Permissive => true,
            Self::MinLength(min) => password.chars().count() >= *min,
        }
    }
}
