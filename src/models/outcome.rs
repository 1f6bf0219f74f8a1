//! Simulation outcome model.
//!
//! The result of a completed run: the annotated tasks, one timeline entry
//! per elapsed tick, and the chronological event log.

use serde::{Deserialize, Serialize};

use super::{Event, EventKind, Task, TimelineEntry};

/// Output of a scheduler run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Tasks in input order, with timing fields filled in.
    pub tasks: Vec<Task>,
    /// Timeline entry for each tick `0..timeline.len()`.
    pub timeline: Vec<TimelineEntry>,
    /// Events in the order they happened.
    pub log: Vec<Event>,
}

impl SimulationOutcome {
    /// Splits the outcome into `(tasks, timeline, log)`.
    pub fn into_parts(self) -> (Vec<Task>, Vec<TimelineEntry>, Vec<Event>) {
        (self.tasks, self.timeline, self.log)
    }

    /// First task with the given ID.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of ticks in which the given task ran.
    pub fn ticks_for(&self, id: &str) -> usize {
        self.timeline
            .iter()
            .filter(|e| e.task_id() == Some(id))
            .count()
    }

    /// Task IDs in the order they completed.
    pub fn completion_order(&self) -> Vec<&str> {
        self.log
            .iter()
            .filter(|e| e.kind == EventKind::Completed)
            .map(|e| e.task_id.as_str())
            .collect()
    }

    /// Total elapsed ticks.
    #[inline]
    pub fn makespan(&self) -> usize {
        self.timeline.len()
    }

    /// Ticks in which a task ran.
    pub fn busy_ticks(&self) -> usize {
        self.timeline.iter().filter(|e| !e.is_idle()).count()
    }

    /// Ticks in which no task was ready.
    pub fn idle_ticks(&self) -> usize {
        self.timeline.iter().filter(|e| e.is_idle()).count()
    }

    /// Whether every task has a completion time.
    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(Task::is_completed)
    }
}
