//! Shortest Time-to-Completion First scheduling.

use super::{reset_all, select_min_by_key, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Shortest Time-to-Completion First (preemptive SJF / SRTF).
///
/// Re-evaluates every tick: the arrived process with the least remaining
/// time runs for exactly one tick (tie → earliest arrival, then lowest
/// index). A newly arrived shorter job therefore preempts the running
/// one at the next tick boundary.
///
/// Emits one 1-tick slice per simulated tick; use
/// [`Timeline::coalesced`] for a merged presentation view.
///
/// # Reference
/// Arpaci-Dusseau (2018), "OSTEP", Ch. 7: STCF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stcf;

impl SchedulingPolicy for Stcf {
    fn name(&self) -> &'static str {
        "STCF"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;
        let mut completed = 0;

        while completed < processes.len() {
            match select_min_by_key(processes, clock, |p| (p.remaining, p.arrival)) {
                None => clock += 1,
                Some(i) => {
                    let p = &mut processes[i];
                    p.record_start(clock);
                    timeline.record(clock, p.pid, 1);
                    p.remaining -= 1;
                    clock += 1;
                    if p.remaining == 0 {
                        p.finish(clock);
                        completed += 1;
                    }
                }
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Time-to-Completion First"
    }
}
