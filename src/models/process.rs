//! Process model.
//!
//! A process is the unit the simulator schedules: a fixed workload
//! description (arrival, burst, priority) plus the simulation state a
//! policy run mutates (remaining time, queue level) and the timing
//! outcomes it records (start, completion).
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! One tick is the finest preemption granularity.
//!
//! # Reference
//! Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

use serde::{Deserialize, Serialize};

/// Upper bound on the number of processes in one simulation run.
///
/// Enforced by [`crate::validation::validate_workload`], not by the
/// policies themselves.
pub const MAX_PROCESSES: usize = 100;

/// A schedulable process.
///
/// The static workload attributes (`pid`, `arrival`, `burst`, `priority`)
/// are never touched by a policy. `remaining` and `level` are working
/// state, re-initialized at the start of every run. `start` and
/// `completion` are written exactly once per run: at the first tick the
/// process executes and at the tick its remaining time reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier within one run.
    pub pid: u32,
    /// Earliest tick the process is eligible to run.
    pub arrival: u64,
    /// Total CPU time required (ticks, > 0).
    pub burst: u64,
    /// Base priority (lower value = higher priority).
    pub priority: u32,
    /// CPU time still required. Counts down from `burst` to 0.
    pub remaining: u64,
    /// Current MLFQ level (0 = highest). Mutated only by MLFQ.
    pub level: usize,
    /// Tick of the first execution slice. `None` until first scheduled.
    pub start: Option<u64>,
    /// Tick at which `remaining` reached 0. `None` until finished.
    pub completion: Option<u64>,
}

impl Process {
    /// Creates a process with default priority 0.
    pub fn new(pid: u32, arrival: u64, burst: u64) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            level: 0,
            start: None,
            completion: None,
        }
    }

    /// Sets the base priority (lower = higher priority).
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Clears all simulation state.
    ///
    /// Every policy calls this on every process before scheduling, so a
    /// single workload can be replayed under different policies.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.level = 0;
        self.start = None;
        self.completion = None;
    }

    /// Whether the process has arrived by tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: u64) -> bool {
        self.arrival <= now
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Records the first-execution tick. Later calls are no-ops.
    pub fn record_start(&mut self, now: u64) {
        self.start.get_or_insert(now);
    }

    /// Records the completion tick.
    pub fn finish(&mut self, now: u64) {
        self.completion = Some(now);
    }

    /// Turnaround time: completion − arrival. `None` until finished.
    pub fn turnaround(&self) -> Option<u64> {
        self.completion.map(|c| c - self.arrival)
    }

    /// Waiting time: turnaround − burst. `None` until finished, or if
    /// the timings are inconsistent (turnaround below burst cannot occur
    /// in a policy-produced run).
    pub fn waiting(&self) -> Option<u64> {
        self.turnaround().and_then(|t| t.checked_sub(self.burst))
    }

    /// Response time: first start − arrival. `None` until first scheduled.
    pub fn response(&self) -> Option<u64> {
        self.start.map(|s| s - self.arrival)
    }
}
