//! Error types for the scheduler.

use crate::validation::ValidationError;

/// Errors returned before a simulation starts.
///
/// A run either completes every task or fails up front; partial results
/// are never returned.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// One or more tasks failed validation.
    #[error("invalid task spec: {}", join_errors(.0))]
    InvalidTaskSpec(Vec<ValidationError>),

    /// The scheduler configuration is out of range.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Details about the rejected setting.
        message: String,
    },
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidTaskSpec`.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidTaskSpec(errors) => errors,
            Self::InvalidConfig { .. } => &[],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidTaskSpec(errors)
    }
}
