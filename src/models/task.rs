//! Patient monitoring task model.
//!
//! A task is one patient that needs a fixed amount of monitoring work.
//! Input fields are set by the caller; timing fields are filled in by the
//! scheduler while the simulation runs and are read-only afterwards.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Tick;

/// Largest accepted burst (2^53).
///
/// Above this, `remaining - 1.0 == remaining` in `f64` and a task could
/// never finish.
pub const MAX_BURST: f64 = 9_007_199_254_740_992.0;

/// A patient monitoring task.
///
/// # Time Representation
/// All times are in ticks relative to the simulation start (t=0).
/// `burst` may be fractional; a task still occupies whole ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Patient identifier. Uniqueness is not enforced.
    pub id: String,
    /// Tick at which the task becomes eligible.
    pub arrival: Tick,
    /// Total monitoring work required (ticks).
    pub burst: f64,
    /// Elevated priority flag.
    pub emergency: bool,
    /// Work left. Starts at `burst`; zero once completed.
    pub remaining: f64,
    /// First tick the task was selected.
    pub start_time: Option<Tick>,
    /// Tick after the one in which remaining work reached zero.
    pub completion_time: Option<Tick>,
    /// `turnaround_time - burst`, set at completion.
    pub waiting_time: Option<f64>,
    /// `completion_time - arrival`, set at completion.
    pub turnaround_time: Option<Tick>,
    /// `start_time - arrival`, set at first selection.
    pub response_time: Option<Tick>,
}

/// Timing values derived from a completed task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedTiming {
    /// `completion - arrival`.
    pub turnaround_time: Tick,
    /// `turnaround - burst`.
    pub waiting_time: f64,
}

impl Task {
    /// Creates a non-emergency task.
    pub fn new(id: impl Into<String>, arrival: Tick, burst: f64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            emergency: false,
            remaining: burst,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            response_time: None,
        }
    }

    /// Sets the emergency flag.
    pub fn with_emergency(mut self, emergency: bool) -> Self {
        self.emergency = emergency;
        self
    }

    /// Returns a copy with every simulation field reset to its initial value.
    pub fn fresh(&self) -> Self {
        Self::new(self.id.clone(), self.arrival, self.burst).with_emergency(self.emergency)
    }

    /// Whether no simulation has touched the task yet.
    ///
    /// `remaining` equals `burst` and every timing field is unset.
    pub fn is_pristine(&self) -> bool {
        self.remaining.to_bits() == self.burst.to_bits()
            && self.start_time.is_none()
            && self.completion_time.is_none()
            && self.waiting_time.is_none()
            && self.turnaround_time.is_none()
            && self.response_time.is_none()
    }

    /// Whether the task can be selected at `tick`.
    ///
    /// An arrived task stays ready until it completes, even if the emergency
    /// nudge has already pushed `remaining` to zero or below.
    pub fn is_ready_at(&self, tick: Tick) -> bool {
        self.arrival <= tick && self.completion_time.is_none()
    }

    /// Whether the task has a completion time.
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Number of whole ticks needed to run `burst` work.
    ///
    /// `None` unless `0 < burst <= MAX_BURST`, the range in which the
    /// conversion is exact.
    pub fn required_ticks(&self) -> Option<u64> {
        if self.burst > 0.0 && self.burst <= MAX_BURST {
            Some(self.burst.ceil() as u64)
        } else {
            None
        }
    }

    /// Derives turnaround and waiting time from the final state.
    ///
    /// Pure: calling it repeatedly on the same task gives the same result.
    /// Returns `None` until the task is completed.
    pub fn derive_timing(&self) -> Option<DerivedTiming> {
        let completion = self.completion_time?;
        let turnaround_time = completion - self.arrival;
        Some(DerivedTiming {
            turnaround_time,
            waiting_time: turnaround_time as f64 - self.burst,
        })
    }

    /// Records the first selection. Later calls are ignored.
    pub(crate) fn mark_started(&mut self, tick: Tick) -> bool {
        if self.start_time.is_some() {
            return false;
        }
        self.start_time = Some(tick);
        self.response_time = Some(tick - self.arrival);
        true
    }

    /// Records completion and derived timing. Later calls are ignored.
    ///
    /// Overshoot below zero is discarded so completed tasks report
    /// `remaining == 0`.
    pub(crate) fn mark_completed(&mut self, completion: Tick) -> bool {
        if self.completion_time.is_some() {
            return false;
        }
        self.remaining = 0.0;
        self.completion_time = Some(completion);
        if let Some(timing) = self.derive_timing() {
            self.turnaround_time = Some(timing.turnaround_time);
            self.waiting_time = Some(timing.waiting_time);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("P1", 2, 4.0).with_emergency(true);
        assert_eq!(task.id, "P1");
        assert_eq!(task.arrival, 2);
        assert!((task.remaining - 4.0).abs() < 1e-12);
        assert!(task.emergency);
        assert!(task.start_time.is_none());
        assert!(!task.is_completed());
    }

    #[test]
    fn test_ready_at() {
        let mut task = Task::new("P1", 3, 1.0);
        assert!(!task.is_ready_at(2));
        assert!(task.is_ready_at(3));
        task.remaining = -0.5;
        assert!(task.is_ready_at(4));
        task.mark_completed(5);
        assert!(!task.is_ready_at(5));
        assert_eq!(task.remaining, 0.0);
    }

    #[test]
    fn test_required_ticks_rounds_up() {
        assert_eq!(Task::new("a", 0, 3.0).required_ticks(), Some(3));
        assert_eq!(Task::new("b", 0, 2.5).required_ticks(), Some(3));
    }

    #[test]
    fn test_required_ticks_out_of_range() {
        assert_eq!(Task::new("max", 0, MAX_BURST).required_ticks(), Some(1 << 53));
        assert_eq!(Task::new("huge", 0, 1e20).required_ticks(), None);
        assert_eq!(Task::new("inf", 0, f64::INFINITY).required_ticks(), None);
        assert_eq!(Task::new("nan", 0, f64::NAN).required_ticks(), None);
        assert_eq!(Task::new("zero", 0, 0.0).required_ticks(), None);
    }

    #[test]
    fn test_pristine() {
        assert!(Task::new("P1", 0, 2.0).is_pristine());
        assert!(Task::new("nan", 0, f64::NAN).is_pristine());

        let mut preset = Task::new("P1", 0, 5.0);
        preset.remaining = 0.5;
        assert!(!preset.is_pristine());

        let mut started = Task::new("P1", 0, 2.0);
        started.mark_started(0);
        assert!(!started.is_pristine());
        assert!(started.fresh().is_pristine());
    }

    #[test]
    fn test_start_and_completion_set_once() {
        let mut task = Task::new("P1", 1, 2.0);
        assert!(task.mark_started(4));
        assert!(!task.mark_started(6));
        assert_eq!(task.start_time, Some(4));
        assert_eq!(task.response_time, Some(3));

        assert!(task.mark_completed(7));
        assert!(!task.mark_completed(9));
        assert_eq!(task.completion_time, Some(7));
        assert_eq!(task.turnaround_time, Some(6));
        assert_eq!(task.waiting_time, Some(4.0));
    }

    #[test]
    fn test_derive_timing_is_pure() {
        let mut task = Task::new("P1", 2, 3.0);
        assert!(task.derive_timing().is_none());
        task.mark_completed(10);

        let first = task.derive_timing();
        let second = task.derive_timing();
        assert_eq!(first, second);
        assert_eq!(first.map(|t| t.turnaround_time), task.turnaround_time);
    }

    #[test]
    fn test_fresh_resets_runtime_state() {
        let mut task = Task::new("P1", 0, 2.0).with_emergency(true);
        task.remaining = -0.5;
        task.mark_started(0);
        task.mark_completed(2);

        let fresh = task.fresh();
        assert_eq!(fresh, Task::new("P1", 0, 2.0).with_emergency(true));
    }
}
