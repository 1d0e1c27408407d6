//! Shortest Job First scheduling.

use super::{reset_all, select_min_by_key, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Shortest Job First, non-preemptive.
///
/// At each decision point, selects the arrived, unscheduled process with
/// the smallest burst time (tie → earliest arrival, then lowest index)
/// and runs it to completion. With nothing arrived yet, the clock steps
/// one idle tick and the search repeats.
///
/// Selection is a linear scan per decision point — O(n²) overall, which
/// is fine at the bounded workload sizes this simulator targets.
///
/// # Reference
/// Arpaci-Dusseau (2018), "OSTEP", Ch. 7: SJF optimality for mean
/// turnaround when all jobs arrive together.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;
        let mut completed = 0;

        while completed < processes.len() {
            match select_min_by_key(processes, clock, |p| (p.burst, p.arrival)) {
                None => clock += 1,
                Some(i) => {
                    let p = &mut processes[i];
                    p.record_start(clock);
                    timeline.record(clock, p.pid, p.burst);
                    clock += p.burst;
                    p.remaining = 0;
                    p.finish(clock);
                    completed += 1;
                }
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}
