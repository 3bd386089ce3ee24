//! # signup-form -- Reactive Sign-Up Form Core
//!
//! Turns raw field edits into user-visible validation state and drives the
//! sign-up call.
//!
//! ## Components
//!
//! - [`ValidationPipeline`] -- owns the four field values. Every edit
//!   recomputes the whole [`FormState`] (per-field errors and `can_submit`)
//!   synchronously through one reducer; the email availability check is the
//!   only asynchronous stage (debounced, deduplicated, cancelled by newer
//!   edits).
//! - [`SignUpOrchestrator`] -- submits the form through an
//!   [`AuthApi`](signup_core::AuthApi), maps the parsed outcome to a
//!   [`SubmissionStatus`](signup_core::SubmissionStatus), and resets the
//!   pipeline afterwards.
//!
//! ## Observation
//!
//! Both components publish through `tokio::sync::watch`: a subscriber sees
//! the current value immediately and every later change. Intermediate
//! states may be coalesced; the settled value after each edit is always
//! delivered.
//!
//! ## Runtime
//!
//! The pipeline spawns its email checks on the Tokio runtime that was
//! current when it was constructed.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod state;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use orchestrator::SignUpOrchestrator;
pub use pipeline::ValidationPipeline;
pub use state::{EmailCheck, FieldInput, FormInput, FormState};
