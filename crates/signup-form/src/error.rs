//! Pipeline construction errors.

/// Errors raised while building a [`ValidationPipeline`](crate::ValidationPipeline).
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Email checks are spawned as Tokio tasks, so a runtime is required.
    #[error("no Tokio runtime available to schedule email checks")]
    NoRuntime,
}
