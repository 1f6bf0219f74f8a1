//! Per-tick execution timeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupied a single tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineEntry {
    /// The named task ran.
    Task(String),
    /// No task was ready.
    Idle,
}

impl TimelineEntry {
    /// Whether the tick was idle.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Task ID, if a task ran.
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Self::Task(id) => Some(id),
            Self::Idle => None,
        }
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => f.write_str(id),
            Self::Idle => f.write_str("Idle"),
        }
    }
}
