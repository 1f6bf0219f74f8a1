//! Task repository.
//!
//! Holds the task list a caller builds up between runs. The repository
//! keeps pristine task specifications and hands the scheduler a fresh copy
//! each time, so the same list can be simulated repeatedly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{SimulationOutcome, Task};
use crate::scheduler::SrtfScheduler;

/// Ordered collection of task specifications.
///
/// # Example
/// ```
/// use triage_srtf::models::Task;
/// use triage_srtf::repository::TaskRepository;
/// use triage_srtf::scheduler::SrtfScheduler;
///
/// let mut repo = TaskRepository::new();
/// repo.add(Task::new("P1", 0, 3.0));
/// repo.add(Task::new("P2", 1, 1.0).with_emergency(true));
///
/// let scheduler = SrtfScheduler::new();
/// let first = repo.run(&scheduler).unwrap();
/// let second = repo.run(&scheduler).unwrap();
/// assert_eq!(first.timeline, second.timeline);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRepository {
    tasks: Vec<Task>,
}

impl TaskRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task. Any simulation state on it is discarded.
    pub fn add(&mut self, task: Task) {
        debug!(task = %task.id, arrival = task.arrival, burst = task.burst, "task added");
        self.tasks.push(task.fresh());
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_task(mut self, task: Task) -> Self {
        self.add(task);
        self
    }

    /// Stored tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Removes all tasks.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Fresh copies of the stored tasks, ready for a run.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.iter().map(Task::fresh).collect()
    }

    /// Runs `scheduler` over a snapshot of the stored tasks.
    pub fn run(&self, scheduler: &SrtfScheduler) -> Result<SimulationOutcome, ScheduleError> {
        scheduler.run(self.snapshot())
    }
}

impl FromIterator<Task> for TaskRepository {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut repo = Self::new();
        for task in iter {
            repo.add(task);
        }
        repo
    }
}
