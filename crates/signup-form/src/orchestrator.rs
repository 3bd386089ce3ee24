//! # Sign-Up Orchestrator
//!
//! Runs one sign-up attempt end to end:
//!
//! ```text
//! submit ──▶ AuthApi::sign_up ──▶ SignUpResponseParser::parse ──▶ SubmissionStatus
//!                 │ transport error            │ rejected / invalid JSON
//!                 └────────────────────────────┴──────────▶ "Sign Up failed"
//! ```
//!
//! Every path ends in a [`SubmissionStatus`]; nothing propagates to the
//! caller. Server-provided rejection messages are logged, not displayed.

use std::sync::Arc;

use signup_core::{AuthApi, Field, SignUpResponseParser, SubmissionStatus};
use tokio::sync::watch;

use crate::pipeline::ValidationPipeline;

/// Submits the form and publishes the outcome.
pub struct SignUpOrchestrator {
    api: Arc<dyn AuthApi>,
    parser: Arc<dyn SignUpResponseParser>,
    pipeline: ValidationPipeline,
    status_tx: watch::Sender<SubmissionStatus>,
}

impl SignUpOrchestrator {
    pub fn new(
        api: Arc<dyn AuthApi>,
        parser: Arc<dyn SignUpResponseParser>,
        pipeline: ValidationPipeline,
    ) -> Self {
        let (status_tx, _) = watch::channel(SubmissionStatus::neutral());
        Self {
            api,
            parser,
            pipeline,
            status_tx,
        }
    }

    /// Attempt a sign-up with the given credentials.
    ///
    /// On completion the pipeline's username, email and confirmation are
    /// cleared (and the password error hidden), then the new status is
    /// published.
    pub async fn submit(&self, username: &str, email: &str, password: &str) {
        let status = self.attempt(username, email, password).await;
        self.pipeline.reset_after_submit();
        self.status_tx.send_replace(status);
    }

    /// Attempt a sign-up with the values currently in the pipeline.
    pub async fn submit_current(&self) {
        let username = self.pipeline.value(Field::Username);
        let email = self.pipeline.value(Field::Email);
        let password = self.pipeline.value(Field::Password);
        self.submit(&username, &email, &password).await;
    }

    /// Outcome of the most recent submit attempt.
    pub fn status(&self) -> SubmissionStatus {
        self.status_tx.borrow().clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SubmissionStatus> {
        self.status_tx.subscribe()
    }

    pub fn pipeline(&self) -> &ValidationPipeline {
        &self.pipeline
    }

    async fn attempt(&self, username: &str, email: &str, password: &str) -> SubmissionStatus {
        let response = match self.api.sign_up(username, email, password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("sign-up request failed: {e}");
                return SubmissionStatus::failure();
            }
        };

        match self.parser.parse(response.status_code, &response.body) {
            Ok(token) => {
                tracing::info!(
                    status_code = response.status_code,
                    token_type = %token.token_type,
                    expires_in = token.expires_in,
                    "sign-up succeeded"
                );
                SubmissionStatus::success()
            }
            Err(failure) => {
                tracing::warn!(status_code = response.status_code, "{failure}");
                SubmissionStatus::failure()
            }
        }
    }
}

impl std::fmt::Debug for SignUpOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpOrchestrator")
            .field("status", &*self.status_tx.borrow())
            .finish_non_exhaustive()
    }
}
