//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed
//! simulation outcome.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Elapsed ticks |
//! | Avg Response | Mean(first run - arrival) |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Utilization | Busy ticks / elapsed ticks |
//!
//! Averages divide by the number of tasks. With no tasks they are `None`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{SimulationOutcome, Task};

/// Simulation performance indicators. All times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of tasks in the run.
    pub task_count: usize,
    /// Number of tasks with a completion time.
    pub completed_count: usize,
    /// Elapsed ticks.
    pub makespan: usize,
    /// Ticks with no ready task.
    pub idle_ticks: usize,
    /// Busy fraction of elapsed ticks (0.0..1.0). `None` if no ticks elapsed.
    pub utilization: Option<f64>,
    /// Mean response time.
    pub avg_response_time: Option<f64>,
    /// Mean turnaround time.
    pub avg_turnaround_time: Option<f64>,
    /// Mean waiting time.
    pub avg_waiting_time: Option<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulation outcome.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let tasks = &outcome.tasks;
        let makespan = outcome.makespan();
        let idle_ticks = outcome.idle_ticks();

        let utilization = if makespan == 0 {
            None
        } else {
            Some((makespan - idle_ticks) as f64 / makespan as f64)
        };

        Self {
            task_count: tasks.len(),
            completed_count: tasks.iter().filter(|t| t.is_completed()).count(),
            makespan,
            idle_ticks,
            utilization,
            avg_response_time: mean(tasks, |t| t.response_time.map(|r| r as f64)),
            avg_turnaround_time: mean(tasks, |t| t.turnaround_time.map(|r| r as f64)),
            avg_waiting_time: mean(tasks, |t| t.waiting_time),
        }
    }
}

/// Sum of `value` over all tasks divided by the task count.
///
/// Missing values count as zero, so the mean is only meaningful once every
/// task has completed.
fn mean(tasks: &[Task], value: impl Fn(&Task) -> Option<f64>) -> Option<f64> {
    if tasks.is_empty() {
        return None;
    }
    let sum: f64 = tasks.iter().filter_map(value).sum();
    Some(sum / tasks.len() as f64)
}
