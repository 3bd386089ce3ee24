//! # Check-Email Subcommand
//!
//! Runs the same two stages the form runs for the email field: the local
//! shape check, then the server availability check.

use anyhow::{Context, Result};
use clap::Args;

use signup_client::{AuthClientConfig, HttpAuthApi};
use signup_core::{is_valid_email, AuthApi, Field, FieldError};

/// Arguments for the `signup check-email` subcommand.
#[derive(Args, Debug)]
pub struct CheckEmailArgs {
    /// Email address to check.
    pub email: String,
}

/// Print whether the email may be used. Returns exit code 0 when it is
/// available and 1 otherwise.
pub async fn run_check_email(args: &CheckEmailArgs, config: &AuthClientConfig) -> Result<u8> {
    let email = args.email.as_str();
    if email.is_empty() {
        println!("{}", FieldError::Missing(Field::Email).message());
        return Ok(1);
    }
    if !is_valid_email(email) {
        println!("{}", FieldError::InvalidEmail.message());
        return Ok(1);
    }

    let api = HttpAuthApi::new(config).context("building HTTP client")?;
    tracing::info!(email, base_url = %config.base_url, "checking email availability");

    if api.check_email_available(email).await {
        println!("{email} is available");
        Ok(0)
    } else {
        println!("{}", FieldError::EmailTaken.message());
        Ok(1)
    }
}
