//! # Wire Models
//!
//! Request and response bodies exchanged with the authentication backend.
//! JSON field names (`name`, `email`, `password`, `validation_errors`,
//! `access_token`, `token_type`, `expires_in`) are fixed by the backend
//! contract and must not be renamed.
//!
//! Secret-bearing types wrap their secrets in [`Zeroizing`] and implement
//! `Debug` by hand so passwords and tokens never reach log output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

// -- Requests -----------------------------------------------------------------

/// Body of `POST /register`.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: Zeroizing<String>,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: &str) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.to_string()),
        }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /validate/email`.
#[derive(Debug, Clone, Serialize)]
pub struct EmailCheckRequest {
    pub email: String,
}

// -- Responses ----------------------------------------------------------------

/// A response as received from the transport: status plus undecoded body.
///
/// Any HTTP status counts as a transport success; interpreting the status
/// is the parser's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Token payload of a successful sign-up.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(deserialize_with = "deserialize_secret")]
    pub access_token: Zeroizing<String>,
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Error body of a rejected sign-up.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpErrorModel {
    pub validation_errors: ValidationErrors,
}

/// Per-field server-side validation messages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub name: Option<Vec<String>>,
    #[serde(default)]
    pub email: Option<Vec<String>>,
    #[serde(default)]
    pub password: Option<Vec<String>>,
}

impl ValidationErrors {
    /// First message in priority order name, email, password.
    pub fn first_message(&self) -> Option<&str> {
        [&self.name, &self.email, &self.password]
            .into_iter()
            .find_map(|messages| messages.as_ref().and_then(|m| m.first()))
            .map(String::as_str)
    }
}

fn serialize_secret<S: Serializer>(secret: &Zeroizing<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(secret.as_str())
}

fn deserialize_secret<'de, D: Deserializer<'de>>(d: D) -> Result<Zeroizing<String>, D::Error> {
    String::deserialize(d).map(Zeroizing::new)
}
