//! Collaborator error types.

/// Errors from the authentication backend transport.
///
/// An HTTP response of any status is not an error at this layer; these
/// variants cover failures that leave no response to interpret.
#[derive(Debug, thiserror::Error)]
pub enum AuthApiError {
    /// The request could not be constructed (bad URL, unserializable body).
    #[error("failed to build request for {endpoint}: {reason}")]
    Request { endpoint: String, reason: String },
    /// Connection, TLS, or timeout failure before a response arrived.
    #[error("HTTP error calling {endpoint}: {reason}")]
    Transport { endpoint: String, reason: String },
    /// The response body could not be read.
    #[error("failed to read response body from {endpoint}: {reason}")]
    Body { endpoint: String, reason: String },
}
