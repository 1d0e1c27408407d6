//! First-In-First-Out scheduling.

use super::{reset_all, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// First-In-First-Out (a.k.a. FCFS).
///
/// Runs processes strictly in input order, each to completion with no
/// preemption. The input must already be sorted by arrival time — the
/// policy does not re-sort, so an out-of-order input breaks the
/// non-decreasing-clock semantics ([`crate::validation::validate_workload`]
/// flags this).
///
/// If the next process has not arrived yet, the clock jumps forward to
/// its arrival (idle gap). One timeline slice per process.
///
/// # Reference
/// Arpaci-Dusseau (2018), "OSTEP", Ch. 7: convoy effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl SchedulingPolicy for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;

        for p in processes.iter_mut() {
            if p.arrival > clock {
                clock = p.arrival;
            }
            p.record_start(clock);
            timeline.record(clock, p.pid, p.burst);
            clock += p.burst;
            p.remaining = 0;
            p.finish(clock);
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "First-In-First-Out"
    }
}
