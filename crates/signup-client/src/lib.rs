//! # signup-client -- HTTP transport for the sign-up stack
//!
//! Implements [`signup_core::AuthApi`] over `reqwest`:
//!
//! - `POST {base}/register` with `{name, email, password}`; every HTTP
//!   response is handed back raw for the parser to interpret.
//! - `POST {base}/validate/email` with `{email}`; HTTP 200 means the
//!   address is free, any other status means it is taken, and a request
//!   that never gets a response counts as free.
//!
//! ## Crate Policy
//!
//! This crate is the only place in the workspace that speaks HTTP. The
//! form crate sees it only through the `AuthApi` trait object.

pub mod config;
pub mod error;
pub mod http;

pub use config::{AuthClientConfig, ConfigError};
pub use error::ClientError;
pub use http::HttpAuthApi;
