//! Input validation for simulation runs.
//!
//! Checks every task before the scheduler starts. Detects:
//! - Negative arrival ticks
//! - Non-positive, non-finite or oversized burst values
//! - Tasks carrying state from an earlier run
//!
//! Duplicate IDs are allowed; tasks are tracked by position, not ID.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Task, MAX_BURST};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Position of the offending task in the input.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Arrival tick is negative.
    InvalidArrival,
    /// Burst is zero, negative, NaN, infinite or above `MAX_BURST`.
    InvalidBurst,
    /// Task already carries simulation state (`remaining != burst` or a
    /// timing field is set).
    StaleState,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task #{}: {}", self.index, self.message)
    }
}

/// Validates the tasks of a simulation run.
///
/// Checks:
/// 1. `arrival >= 0`
/// 2. `burst` is finite, `> 0` and `<= MAX_BURST`
/// 3. the task is pristine: `remaining == burst`, no timing field set
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        if task.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                index,
                format!("Task '{}' has negative arrival {}", task.id, task.arrival),
            ));
        }

        if !task.burst.is_finite() || task.burst <= 0.0 || task.burst > MAX_BURST {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                index,
                format!("Task '{}' has invalid burst {}", task.id, task.burst),
            ));
        }

        if !task.is_pristine() {
            errors.push(ValidationError::new(
                ValidationErrorKind::StaleState,
                index,
                format!(
                    "Task '{}' carries state from an earlier run (remaining {}, completion {:?})",
                    task.id, task.remaining, task.completion_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
