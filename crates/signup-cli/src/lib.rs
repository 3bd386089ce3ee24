//! # signup-cli -- Command-line front end for the sign-up stack
//!
//! Provides the `signup` binary. Each subcommand drives the same
//! validation pipeline and orchestrator a graphical form would use, with
//! the live HTTP client as the backend.
//!
//! ## Subcommands
//!
//! - `signup check-email <EMAIL>` -- shape check, then server availability.
//! - `signup register ...` -- validate all four fields, submit when the
//!   form is submittable, print the outcome.
//!
//! ```bash
//! signup --api-url http://localhost:8080 check-email alice@example.com
//! signup register --username alice --email alice@example.com \
//!     --password secret12 --confirm-password secret12
//! ```

pub mod check_email;
pub mod register;

use anyhow::{Context, Result};
use signup_client::AuthClientConfig;

/// Resolve the backend configuration: explicit command-line values first,
/// environment for anything not given.
pub fn client_config(api_url: Option<&str>, timeout_secs: Option<u64>) -> Result<AuthClientConfig> {
    AuthClientConfig::from_env_with_overrides(api_url, timeout_secs)
        .context("invalid backend configuration")
}
