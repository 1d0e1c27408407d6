//! Round Robin scheduling.

use std::collections::VecDeque;

use super::{reset_all, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Round Robin with a fixed time quantum.
///
/// Keeps a FIFO ready queue of process indices. The head process runs
/// for min(remaining, quantum) ticks, then processes that arrived during
/// the slice join the tail first and the preempted process re-enters
/// behind them — a process whose quantum just expired never cuts ahead
/// of work that arrived while it ran.
///
/// When the queue drains with work still pending, the clock jumps
/// straight to the earliest outstanding arrival instead of ticking
/// through the idle span.
///
/// # Reference
/// Arpaci-Dusseau (2018), "OSTEP", Ch. 7: RR and the response-time /
/// turnaround trade-off.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Time quantum in ticks (> 0).
    pub quantum: u64,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given quantum.
    pub fn new(quantum: u64) -> Self {
        Self { quantum }
    }
}

impl Default for RoundRobin {
    /// The reference default quantum of 3.
    fn default() -> Self {
        Self { quantum: 3 }
    }
}

/// Enqueues, in index order, every unadmitted process that has arrived.
fn admit_arrivals(
    processes: &[Process],
    now: u64,
    admitted: &mut [bool],
    queue: &mut VecDeque<usize>,
) {
    for (i, p) in processes.iter().enumerate() {
        if !admitted[i] && p.has_arrived(now) {
            queue.push_back(i);
            admitted[i] = true;
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut timeline = Timeline::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut admitted = vec![false; processes.len()];
        let mut clock: u64 = 0;
        let mut completed = 0;

        admit_arrivals(processes, clock, &mut admitted, &mut queue);

        while completed < processes.len() {
            let Some(idx) = queue.pop_front() else {
                // Idle skip: jump to the earliest outstanding arrival.
                match processes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !admitted[*i])
                    .map(|(_, p)| p.arrival)
                    .min()
                {
                    Some(next) => clock = next,
                    None => clock += 1,
                }
                admit_arrivals(processes, clock, &mut admitted, &mut queue);
                continue;
            };

            let p = &mut processes[idx];
            p.record_start(clock);
            let run_time = p.remaining.min(self.quantum);
            timeline.record(clock, p.pid, run_time);
            clock += run_time;
            p.remaining -= run_time;

            // New arrivals enter the queue before the preempted process.
            admit_arrivals(processes, clock, &mut admitted, &mut queue);

            if processes[idx].remaining > 0 {
                queue.push_back(idx);
            } else {
                processes[idx].finish(clock);
                completed += 1;
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
