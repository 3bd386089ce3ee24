//! # Collaborator Interfaces
//!
//! The validation pipeline and the orchestrator never talk HTTP directly.
//! They receive an [`AuthApi`] and a [`SignUpResponseParser`] at
//! construction, so a live client, a stub server, or a test double can be
//! swapped in.
//!
//! Implementations must be `Send + Sync` so they can be shared across
//! Tokio tasks behind an `Arc`. Both traits are object-safe.

use async_trait::async_trait;

use crate::error::AuthApiError;
use crate::model::{RawResponse, SignUpErrorModel, TokenResponse};

/// Message used when a rejected sign-up carries no usable field message.
pub const GENERIC_REJECTION_MESSAGE: &str = "Signing in failed";

/// Remote authentication operations the form depends on.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Submit a registration. Any HTTP response is returned as
    /// [`RawResponse`]; only failures without a response are errors.
    async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RawResponse, AuthApiError>;

    /// Whether `email` is still free to register.
    ///
    /// Never fails: when the check cannot be performed the implementation
    /// returns `true` so the user is not blocked.
    async fn check_email_available(&self, email: &str) -> bool;
}

/// Why a sign-up response did not yield a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpFailure {
    /// Non-2xx response; `message` is the first server-side field message
    /// or [`GENERIC_REJECTION_MESSAGE`].
    #[error("sign-up rejected: {message}")]
    Rejected { message: String },
    /// 2xx response whose body is not a valid token payload.
    #[error("sign-up response is not a valid token payload")]
    InvalidJson,
}

/// Interprets a raw sign-up response.
pub trait SignUpResponseParser: Send + Sync {
    fn parse(&self, status_code: u16, body: &[u8]) -> Result<TokenResponse, SignUpFailure>;
}

/// Default parser for the backend's JSON contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseParser;

impl SignUpResponseParser for JsonResponseParser {
    fn parse(&self, status_code: u16, body: &[u8]) -> Result<TokenResponse, SignUpFailure> {
        if !(200..300).contains(&status_code) {
            let message = match serde_json::from_slice::<SignUpErrorModel>(body) {
                Ok(model) => model
                    .validation_errors
                    .first_message()
                    .unwrap_or(GENERIC_REJECTION_MESSAGE)
                    .to_string(),
                Err(e) => {
                    tracing::debug!(status_code, "sign-up error body did not parse: {e}");
                    GENERIC_REJECTION_MESSAGE.to_string()
                }
            };
            return Err(SignUpFailure::Rejected { message });
        }

        serde_json::from_slice::<TokenResponse>(body).map_err(|e| {
            tracing::debug!(status_code, "sign-up token body did not parse: {e}");
            SignUpFailure::InvalidJson
        })
    }
}
