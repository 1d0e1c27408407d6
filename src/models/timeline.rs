//! Execution timeline model.
//!
//! A timeline is the ordered record of which process occupied the CPU,
//! when, and for how long — the data behind a Gantt chart. One policy
//! run produces one timeline; reporting layers only read it.
//!
//! Preemptive policies (STCF, MLFQ) emit one slice per simulated tick.
//! [`Timeline::coalesced`] merges adjacent same-process slices for
//! presentation without changing the underlying simulation record.

use serde::{Deserialize, Serialize};

/// One contiguous span of CPU occupancy by a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Tick at which the slice begins.
    pub start: u64,
    /// Process occupying the CPU.
    pub pid: u32,
    /// Length of the slice in ticks (> 0).
    pub duration: u64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(start: u64, pid: u32, duration: u64) -> Self {
        Self {
            start,
            pid,
            duration,
        }
    }

    /// Tick one past the last tick of the slice.
    #[inline]
    pub fn end(&self) -> u64 {
        self.start + self.duration
    }
}

/// An ordered sequence of execution slices.
///
/// Slices are appended in non-decreasing start order as the simulation
/// clock advances; gaps between consecutive slices are idle time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in non-decreasing start order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution slice.
    pub fn record(&mut self, start: u64, pid: u32, duration: u64) {
        self.slices.push(Slice::new(start, pid, duration));
    }

    /// Total CPU-busy time: sum of all slice durations.
    pub fn busy_time(&self) -> u64 {
        self.slices.iter().map(|s| s.duration).sum()
    }

    /// End of the last slice, i.e. the tick the simulation went idle for
    /// good. 0 for an empty timeline.
    pub fn span(&self) -> u64 {
        self.slices.iter().map(|s| s.end()).max().unwrap_or(0)
    }

    /// All slices belonging to one process.
    pub fn slices_for(&self, pid: u32) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline holds no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Returns a copy with adjacent contiguous same-process slices merged.
    ///
    /// Tick-granular output from STCF and MLFQ collapses into one slice
    /// per uninterrupted run. Slices separated by an idle gap are not
    /// merged even when the same process runs on both sides of it.
    pub fn coalesced(&self) -> Timeline {
        let mut merged: Vec<Slice> = Vec::new();
        for &slice in &self.slices {
            match merged.last_mut() {
                Some(prev) if prev.pid == slice.pid && prev.end() == slice.start => {
                    prev.duration += slice.duration;
                }
                _ => merged.push(slice),
            }
        }
        Timeline { slices: merged }
    }
}
