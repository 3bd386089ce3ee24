//! Client construction errors.

/// Errors raised while building an [`HttpAuthApi`](crate::HttpAuthApi).
///
/// Request-time failures use [`signup_core::AuthApiError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// The underlying HTTP client could not be built.
    #[error("failed to initialise HTTP client: {0}")]
    Init(#[source] reqwest::Error),
}
