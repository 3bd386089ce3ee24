//! Pipeline configuration.

use std::time::Duration;

use signup_core::PasswordPolicy;

/// Default quiet period before an email is sent to the server.
pub const DEFAULT_EMAIL_DEBOUNCE: Duration = Duration::from_millis(500);

/// Tunables for [`ValidationPipeline`](crate::ValidationPipeline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// How long the email must stay unchanged before it is checked remotely.
    pub email_debounce: Duration,
    /// Rule applied to non-empty passwords.
    pub password_policy: PasswordPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            email_debounce: DEFAULT_EMAIL_DEBOUNCE,
            password_policy: PasswordPolicy::default(),
        }
    }
}
