//! # Register Subcommand
//!
//! Feeds the four values through the validation pipeline exactly as a form
//! would, waits for the email availability check to land, and submits only
//! when the form is submittable.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use signup_client::{AuthClientConfig, HttpAuthApi};
use signup_core::{AuthApi, Field, JsonResponseParser, PasswordPolicy, StatusKind, SubmissionStatus};
use signup_form::{PipelineConfig, SignUpOrchestrator, ValidationPipeline};

/// Arguments for the `signup register` subcommand.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name sent as `name`.
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    /// Quiet period before the email is checked, in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub debounce_ms: u64,
    /// Require passwords of at least this many characters.
    #[arg(long)]
    pub min_password_length: Option<usize>,
}

impl RegisterArgs {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            email_debounce: Duration::from_millis(self.debounce_ms),
            password_policy: match self.min_password_length {
                Some(n) => PasswordPolicy::MinLength(n),
                None => PasswordPolicy::Permissive,
            },
        }
    }
}

/// What a registration attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterReport {
    /// Every field error shown once validation settled, in form order.
    pub field_errors: Vec<(Field, &'static str)>,
    /// Submission outcome; `None` when the form was not submittable.
    pub status: Option<SubmissionStatus>,
}

impl RegisterReport {
    pub fn succeeded(&self) -> bool {
        matches!(&self.status, Some(s) if s.kind == StatusKind::Success)
    }
}

/// Validate and, when possible, submit against `api`.
pub async fn register(args: &RegisterArgs, api: Arc<dyn AuthApi>) -> Result<RegisterReport> {
    let pipeline = ValidationPipeline::new(Arc::clone(&api), args.pipeline_config())
        .context("starting validation pipeline")?;

    pipeline.set_username(args.username.as_str());
    pipeline.set_email(args.email.as_str());
    pipeline.set_password(args.password.as_str());
    pipeline.set_confirm_password(args.confirm_password.as_str());

    let state = pipeline.settled().await;
    let field_errors: Vec<_> = Field::ALL
        .into_iter()
        .filter_map(|field| {
            let message = state.message(field);
            (!message.is_empty()).then_some((field, message))
        })
        .collect();

    if !state.can_submit {
        tracing::info!(errors = field_errors.len(), "form is not submittable");
        return Ok(RegisterReport {
            field_errors,
            status: None,
        });
    }

    let orchestrator = SignUpOrchestrator::new(api, Arc::new(JsonResponseParser), pipeline);
    orchestrator.submit_current().await;
    Ok(RegisterReport {
        field_errors,
        status: Some(orchestrator.status()),
    })
}

/// Run `signup register` against the configured backend.
pub async fn run_register(args: &RegisterArgs, config: &AuthClientConfig) -> Result<u8> {
    let api = HttpAuthApi::new(config).context("building HTTP client")?;
    let report = register(args, Arc::new(api)).await?;

    for (field, message) in &report.field_errors {
        println!("{}: {message}", field.label());
    }
    match &report.status {
        Some(status) => println!("{status}"),
        None => println!("Form is not ready to submit"),
    }

    Ok(if report.succeeded() { 0 } else { 1 })
}
