//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Default emergency nudge subtracted per ready tick.
pub const DEFAULT_EMERGENCY_EPSILON: f64 = 1e-4;

/// How emergency tasks win ties against regular tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Subtract epsilon from every ready emergency task's `remaining` each tick.
    ///
    /// The subtraction is permanent, so a long-waiting emergency task can
    /// finish in fewer ticks than its burst.
    #[default]
    Nudge,
    /// Compare by `(remaining, !emergency)` without touching `remaining`.
    Comparator,
}

/// Scheduler settings.
///
/// Deserializes with defaults for any missing field:
///
/// ```
/// use triage_srtf::scheduler::{SchedulerConfig, TieBreak};
///
/// let config = SchedulerConfig::default();
/// assert_eq!(config.tie_break, TieBreak::Nudge);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Emergency tie-break strategy.
    pub tie_break: TieBreak,
    /// Nudge size for `TieBreak::Nudge`. Must lie in `(0, 1)`.
    pub emergency_epsilon: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Nudge,
            emergency_epsilon: DEFAULT_EMERGENCY_EPSILON,
        }
    }
}

impl SchedulerConfig {
    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let eps = self.emergency_epsilon;
        if !eps.is_finite() || eps <= 0.0 || eps >= 1.0 {
            return Err(ScheduleError::InvalidConfig {
                message: format!("emergency_epsilon must be in (0, 1), got {eps}"),
            });
        }
        Ok(())
    }
}
