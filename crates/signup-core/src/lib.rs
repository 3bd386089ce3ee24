//! # signup-core -- Foundational Types for the Sign-Up Stack
//!
//! Leaf crate of the workspace. Defines the vocabulary shared by the
//! validation pipeline, the HTTP client, and the CLI:
//!
//! - [`Field`] and [`FieldError`] -- the four form fields and the fixed set
//!   of user-visible error messages.
//! - [`is_valid_email`] -- canonical email shape check (regex, not RFC 5322).
//! - [`PasswordPolicy`] -- pluggable password rule, permissive by default.
//! - Wire models ([`RegisterRequest`], [`TokenResponse`], [`SignUpErrorModel`])
//!   whose JSON field names are fixed by the backend contract.
//! - [`SubmissionStatus`] -- outcome of the last submit attempt.
//! - Collaborator traits [`AuthApi`] and [`SignUpResponseParser`] plus the
//!   default [`JsonResponseParser`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `signup-*` crates.
//! - No HTTP client types in public signatures; transports live in
//!   `signup-client`.
//! - Secrets (passwords, access tokens) are wrapped in
//!   [`zeroize::Zeroizing`] and redacted from `Debug` output.

pub mod api;
pub mod email;
pub mod error;
pub mod field;
pub mod model;
pub mod password;
pub mod status;

pub use api::{AuthApi, JsonResponseParser, SignUpFailure, SignUpResponseParser};
pub use email::is_valid_email;
pub use error::AuthApiError;
pub use field::{Field, FieldError};
pub use model::{
    EmailCheckRequest, RawResponse, RegisterRequest, SignUpErrorModel, TokenResponse,
    ValidationErrors,
};
pub use password::PasswordPolicy;
pub use status::{StatusKind, SubmissionStatus};
