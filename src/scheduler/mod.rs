//! SRTF scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `SrtfScheduler` runs a discrete-time, preemptive
//! Shortest-Remaining-Time-First simulation on a single executor.
//! Emergency tasks win ties through a configurable [`TieBreak`].
//!
//! # KPI
//!
//! `ScheduleKpi` computes average response, turnaround and waiting time,
//! plus makespan and utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod kpi;
mod srtf;

pub use config::{SchedulerConfig, TieBreak, DEFAULT_EMERGENCY_EPSILON};
pub use kpi::ScheduleKpi;
pub use srtf::SrtfScheduler;
