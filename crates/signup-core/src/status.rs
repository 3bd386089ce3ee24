//! Submission status shown after a submit attempt.

use serde::{Deserialize, Serialize};

/// Semantic class of a status line; the presentation layer maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Failure,
}

/// Outcome of the most recent submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl SubmissionStatus {
    pub const SUCCESS_MESSAGE: &'static str = "Sign Up is successfully";
    pub const FAILURE_MESSAGE: &'static str = "Sign Up failed";

    /// Empty neutral status, as at session start.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn success() -> Self {
        Self {
            message: Self::SUCCESS_MESSAGE.to_string(),
            kind: StatusKind::Success,
        }
    }

    pub fn failure() -> Self {
        Self {
            message: Self::FAILURE_MESSAGE.to_string(),
            kind: StatusKind::Failure,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
