//! Preemptive SRTF scheduling simulation for patient monitoring tasks.
//!
//! Simulates a single monitor that serves one patient per tick, always
//! picking the ready patient with the least remaining monitoring work.
//! Emergency patients win ties. A run yields the annotated tasks, a
//! per-tick timeline and an event log.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TimelineEntry`, `Event`, `SimulationOutcome`
//! - **`scheduler`**: `SrtfScheduler`, `SchedulerConfig`, `ScheduleKpi`
//! - **`repository`**: `TaskRepository`, a reusable task list
//! - **`validation`**: Input checks (negative arrival, invalid burst)
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use triage_srtf::models::Task;
//! use triage_srtf::scheduler::{ScheduleKpi, SrtfScheduler};
//!
//! let tasks = vec![
//!     Task::new("A", 0, 5.0),
//!     Task::new("B", 1, 3.0),
//! ];
//! let outcome = SrtfScheduler::new().run(tasks)?;
//! let kpi = ScheduleKpi::calculate(&outcome);
//! assert_eq!(kpi.makespan, 8);
//! assert_eq!(kpi.avg_turnaround_time, Some(5.5));
//! # Ok::<(), triage_srtf::ScheduleError>(())
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (per-tick decisions at `debug`,
//! completions at `info`) and never installs a subscriber.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod repository;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
