//! # signup CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use signup_cli::check_email::{run_check_email, CheckEmailArgs};
use signup_cli::client_config;
use signup_cli::register::{run_register, RegisterArgs};

/// Sign-up stack CLI
///
/// Validates sign-up details the way the sign-up form does and talks to
/// the authentication backend.
#[derive(Parser, Debug)]
#[command(name = "signup", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend base URL. Overrides `SIGNUP_API_URL`.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds. Overrides `SIGNUP_TIMEOUT_SECS`.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether an email address is well formed and still free.
    CheckEmail(CheckEmailArgs),

    /// Validate the sign-up form and register when it is submittable.
    Register(RegisterArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("signup CLI starting");

    let config = match client_config(cli.api_url.as_deref(), cli.timeout_secs) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(?config, "resolved backend configuration");

    let result = match &cli.command {
        Commands::CheckEmail(args) => run_check_email(args, &config).await,
        Commands::Register(args) => run_register(args, &config).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
