//! Canonical email shape validation.
//!
//! Structural check only: ASCII letters, digits and `._%+-` in the local
//! part, a domain containing at least one dot, and a 2–64 letter TLD. This
//! is deliberately not RFC 5322.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email shape regex is valid")
});

/// Whether `candidate` has the canonical `local-part@domain.tld` shape.
///
/// Pure: the same input always yields the same answer.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}
