//! Preemptive Shortest-Remaining-Time-First scheduler.
//!
//! # Algorithm
//!
//! At every tick `t`, starting from 0:
//! 1. Collect the ready set: arrived, not yet completed, in input order.
//! 2. Empty ready set → record `Idle` and advance.
//! 3. `TieBreak::Nudge`: subtract epsilon from each ready emergency task.
//! 4. Select the minimum `remaining`; the first task in input order wins ties.
//! 5. Run it for one tick (`remaining -= 1`), record start/completion.
//!
//! The run ends when every task has completed.
//!
//! # Complexity
//! O(T * n) where T = elapsed ticks, n = tasks.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use std::cmp::Ordering;

use tracing::{debug, info, instrument, trace};

use super::config::{SchedulerConfig, TieBreak};
use crate::error::ScheduleError;
use crate::models::{Event, SimulationOutcome, Task, Tick, TimelineEntry};
use crate::validation::validate_tasks;

/// Tick-driven SRTF scheduler.
///
/// Holds only configuration; every call to [`run`](Self::run) starts from
/// the tasks it is given and keeps no state afterwards.
///
/// # Example
///
/// ```
/// use triage_srtf::models::Task;
/// use triage_srtf::scheduler::SrtfScheduler;
///
/// let tasks = vec![Task::new("A", 0, 2.0), Task::new("B", 1, 1.0)];
/// let outcome = SrtfScheduler::new().run(tasks).unwrap();
///
/// let order: Vec<String> = outcome.timeline.iter().map(ToString::to_string).collect();
/// assert_eq!(order, ["A", "A", "B"]);
/// assert_eq!(outcome.task("B").unwrap().completion_time, Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SrtfScheduler {
    config: SchedulerConfig,
}

impl SrtfScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from a validated configuration.
    pub fn from_config(config: SchedulerConfig) -> Result<Self, ScheduleError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Sets the emergency tie-break strategy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Sets the emergency nudge size.
    pub fn with_emergency_epsilon(mut self, epsilon: f64) -> Self {
        self.config.emergency_epsilon = epsilon;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the simulation to completion.
    ///
    /// Takes the tasks by value: the scheduler is their only mutator for
    /// the duration of the run and they come back annotated in the outcome.
    ///
    /// # Errors
    /// `InvalidTaskSpec` if any task has a negative arrival, a burst
    /// outside `(0, MAX_BURST]`, or state left over from an earlier run
    /// (use [`Task::fresh`] to rerun a task); `InvalidConfig` if epsilon
    /// is out of range. Nothing is simulated in either case.
    #[instrument(skip_all, fields(tasks = tasks.len(), tie_break = ?self.config.tie_break))]
    pub fn run(&self, mut tasks: Vec<Task>) -> Result<SimulationOutcome, ScheduleError> {
        self.config.validate()?;
        validate_tasks(&tasks)?;

        let total = tasks.len();
        let mut timeline = Vec::new();
        let mut log = Vec::new();
        let mut ready: Vec<usize> = Vec::with_capacity(total);
        let mut time: Tick = 0;
        let mut completed = 0;

        while completed < total {
            ready.clear();
            ready.extend((0..total).filter(|&i| tasks[i].is_ready_at(time)));

            if ready.is_empty() {
                debug!(tick = time, "idle");
                timeline.push(TimelineEntry::Idle);
                time += 1;
                continue;
            }

            if self.config.tie_break == TieBreak::Nudge {
                self.nudge_emergencies(&mut tasks, &ready);
            }

            let selected = self.select(&tasks, &ready);
            let task = &mut tasks[selected];

            if task.mark_started(time) {
                debug!(tick = time, task = %task.id, response = time - task.arrival, "first run");
            }
            timeline.push(TimelineEntry::Task(task.id.clone()));
            task.remaining -= 1.0;
            debug!(tick = time, task = %task.id, remaining = task.remaining, "ran");

            if task.emergency {
                log.push(Event::emergency(time, task.id.as_str()));
            }

            if task.remaining <= 0.0 {
                task.mark_completed(time + 1);
                completed += 1;
                info!(
                    tick = time,
                    task = %task.id,
                    turnaround = ?task.turnaround_time,
                    waiting = ?task.waiting_time,
                    "completed"
                );
                log.push(Event::completed(time, task.id.as_str()));
            }

            time += 1;
        }

        info!(ticks = time, events = log.len(), "simulation finished");

        Ok(SimulationOutcome {
            tasks,
            timeline,
            log,
        })
    }

    /// Applies the emergency nudge to every ready emergency task.
    fn nudge_emergencies(&self, tasks: &mut [Task], ready: &[usize]) {
        let eps = self.config.emergency_epsilon;
        for &i in ready {
            let task = &mut tasks[i];
            if task.emergency {
                task.remaining -= eps;
                trace!(task = %task.id, remaining = task.remaining, "nudged");
            }
        }
    }

    /// Index of the ready task to run. `ready` must be non-empty.
    fn select(&self, tasks: &[Task], ready: &[usize]) -> usize {
        let mut best = ready[0];
        for &i in &ready[1..] {
            if self.compare(&tasks[i], &tasks[best]) == Ordering::Less {
                best = i;
            }
        }
        best
    }

    /// Orders two ready tasks; `Less` means `a` runs before `b`.
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let by_remaining = a
            .remaining
            .partial_cmp(&b.remaining)
            .unwrap_or(Ordering::Equal);
        match self.config.tie_break {
            TieBreak::Nudge => by_remaining,
            // false < true, so emergency tasks sort first
            TieBreak::Comparator => by_remaining.then((!a.emergency).cmp(&!b.emergency)),
        }
    }
}
