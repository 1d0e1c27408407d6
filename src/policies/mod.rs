//! Scheduling policies.
//!
//! Five classic CPU scheduling algorithms sharing one seam: a policy
//! takes exclusive ownership of the caller's process slice for the
//! duration of a run, resets it, schedules every process to completion,
//! and returns the execution timeline.
//!
//! # Usage
//!
//! ```
//! use sched_sim::models::sample_workload;
//! use sched_sim::policies::{SchedulingPolicy, Stcf};
//!
//! let mut workload = sample_workload();
//! let timeline = Stcf.run(&mut workload);
//! assert!(workload.iter().all(|p| p.is_complete()));
//! assert_eq!(timeline.busy_time(), 16);
//! ```
//!
//! # References
//!
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fifo;
mod mlfq;
mod round_robin;
mod sjf;
mod stcf;

pub use fifo::Fifo;
pub use mlfq::{Mlfq, MlfqConfig};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use stcf::Stcf;

use std::fmt::Debug;

use crate::models::{Process, Timeline};

/// A scheduling policy.
///
/// # Contract
/// `run` resets every process, simulates until all of them complete, and
/// returns a fresh timeline; an empty slice yields an empty timeline.
/// There is no partial-failure mode. Inputs are trusted preconditions —
/// gate them through [`crate::validation`] first; the policies perform no
/// checking of their own.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "SJF", "MLFQ").
    fn name(&self) -> &'static str;

    /// Runs the workload to completion and returns the timeline.
    fn run(&self, processes: &mut [Process]) -> Timeline;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The five policies under their reference default parameters
/// (Round Robin quantum 3; MLFQ quantums {2, 4, 8}, boost interval 10).
pub fn standard_policies() -> Vec<Box<dyn SchedulingPolicy>> {
    vec![
        Box::new(Fifo),
        Box::new(Sjf),
        Box::new(Stcf),
        Box::new(RoundRobin::default()),
        Box::new(Mlfq::default()),
    ]
}

/// Clears simulation state on every process before a run.
pub(crate) fn reset_all(processes: &mut [Process]) {
    for p in processes.iter_mut() {
        p.reset();
    }
}

/// Index of the minimum-key process among those that have arrived by
/// `now` and still have work remaining.
///
/// Scans in index order and keeps the first minimum, so the key decides
/// selection, key ties fall to the earliest entry in the slice. SJF keys
/// on (burst, arrival), STCF on (remaining, arrival); index order is the
/// final tie-break for both.
pub(crate) fn select_min_by_key<K: Ord>(
    processes: &[Process],
    now: u64,
    key: impl Fn(&Process) -> K,
) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.has_arrived(now) && p.remaining > 0)
        .min_by_key(|(_, p)| key(p))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_workload, WorkloadGenerator};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn assert_run_invariants(policy: &dyn SchedulingPolicy, workload: &mut [Process]) {
        let timeline = policy.run(workload);
        let total_burst: u64 = workload.iter().map(|p| p.burst).sum();

        // Busy time covers exactly the work submitted.
        assert_eq!(
            timeline.busy_time(),
            total_burst,
            "{}: busy time != total burst",
            policy.name()
        );

        // Slices appear in non-decreasing start order.
        assert!(
            timeline
                .slices
                .windows(2)
                .all(|s| s[0].start <= s[1].start),
            "{}: timeline out of order",
            policy.name()
        );

        for p in workload.iter() {
            let start = p.start.expect("process never started");
            let completion = p.completion.expect("process never completed");
            assert!(start >= p.arrival, "{}: start < arrival", policy.name());
            assert!(completion > start, "{}: completion <= start", policy.name());
            assert_eq!(p.remaining, 0, "{}: work left over", policy.name());
            // waiting = turnaround - burst, and is non-negative
            let turnaround = p.turnaround().unwrap();
            assert!(turnaround >= p.burst, "{}: negative waiting", policy.name());
            assert_eq!(p.waiting().unwrap(), turnaround - p.burst);
        }
    }

    #[test]
    fn test_all_policies_sample_workload_invariants() {
        for policy in standard_policies() {
            let mut workload = sample_workload();
            assert_run_invariants(policy.as_ref(), &mut workload);
        }
    }

    #[test]
    fn test_all_policies_generated_workload_invariants() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let workload = WorkloadGenerator::new(25)
            .with_max_arrival(30)
            .with_burst_range(1, 12)
            .generate(&mut rng);

        for policy in standard_policies() {
            let mut run = workload.clone();
            assert_run_invariants(policy.as_ref(), &mut run);
        }
    }

    #[test]
    fn test_all_policies_empty_workload() {
        for policy in standard_policies() {
            let timeline = policy.run(&mut []);
            assert!(timeline.is_empty(), "{}: non-empty timeline", policy.name());
        }
    }

    #[test]
    fn test_run_resets_previous_state() {
        // Replaying the same slice under a second policy must not leak
        // timings from the first run.
        let mut workload = sample_workload();
        Fifo.run(&mut workload);
        let fifo_completions: Vec<_> = workload.iter().map(|p| p.completion).collect();

        Stcf.run(&mut workload);
        let stcf_completions: Vec<_> = workload.iter().map(|p| p.completion).collect();
        assert_ne!(fifo_completions, stcf_completions);
        assert!(workload.iter().all(|p| p.is_complete()));
    }

    #[test]
    fn test_policy_names_distinct() {
        let policies = standard_policies();
        for (i, a) in policies.iter().enumerate() {
            for b in policies.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_select_min_by_key_tie_breaks() {
        let procs = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 3),
            Process::new(3, 0, 3),
        ];
        // Equal bursts for pids 2 and 3, equal arrivals → lowest index wins.
        let idx = select_min_by_key(&procs, 0, |p| (p.burst, p.arrival));
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn test_select_min_by_key_ignores_unarrived() {
        let procs = vec![Process::new(1, 5, 1), Process::new(2, 0, 9)];
        assert_eq!(
            select_min_by_key(&procs, 0, |p| (p.burst, p.arrival)),
            Some(1)
        );
        assert_eq!(
            select_min_by_key(&procs, 5, |p| (p.burst, p.arrival)),
            Some(0)
        );
    }
}
