//! Scheduling domain models.
//!
//! Provides the data types consumed and produced by the scheduler:
//! the patient task, the per-tick timeline and the event log.
//!
//! # Domain Mappings
//!
//! | triage-srtf | CPU scheduling | Healthcare |
//! |-------------|----------------|------------|
//! | Task | Process | Patient monitoring case |
//! | burst | CPU burst | Monitoring time |
//! | emergency | Priority boost | Emergency patient |
//! | TimelineEntry | Gantt chart cell | Monitor slot |

mod event;
mod outcome;
mod task;
mod timeline;

pub use event::{Event, EventKind};
pub use outcome::SimulationOutcome;
pub use task::{DerivedTiming, Task, MAX_BURST};
pub use timeline::TimelineEntry;

/// Discrete simulation time unit.
pub type Tick = i64;
