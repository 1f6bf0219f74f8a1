//! Execution log entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Tick;

/// A notable event recorded during simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Tick in which the event happened.
    pub tick: Tick,
    /// Task the event refers to.
    pub task_id: String,
    /// Type of event.
    pub kind: EventKind,
}

/// Classification of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// An emergency task ran during this tick.
    EmergencyMonitoring,
    /// The task finished its monitoring work in this tick.
    Completed,
}

impl Event {
    /// Creates an emergency monitoring event.
    pub fn emergency(tick: Tick, task_id: impl Into<String>) -> Self {
        Self {
            tick,
            task_id: task_id.into(),
            kind: EventKind::EmergencyMonitoring,
        }
    }

    /// Creates a completion event.
    pub fn completed(tick: Tick, task_id: impl Into<String>) -> Self {
        Self {
            tick,
            task_id: task_id.into(),
            kind: EventKind::Completed,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::EmergencyMonitoring => {
                write!(f, "Emergency Patient {} is being monitored", self.task_id)
            }
            EventKind::Completed => write!(f, "Monitoring Completed for Patient {}", self.task_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_messages() {
        assert_eq!(
            Event::emergency(3, "P7").to_string(),
            "Emergency Patient P7 is being monitored"
        );
        assert_eq!(
            Event::completed(4, "P7").to_string(),
            "Monitoring Completed for Patient P7"
        );
    }
}
