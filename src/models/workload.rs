//! Workload construction.
//!
//! A workload is an ordered process set fed to one policy run. This
//! module provides the reference sample workload used by driver programs
//! and a seeded random generator for larger comparison runs.
//!
//! Workloads are emitted sorted by arrival time (ties by pid) — the
//! input-order contract FIFO depends on.

use rand::Rng;

use super::Process;

/// The three-process reference workload used by driver programs.
///
/// | pid | arrival | burst | priority |
/// |-----|---------|-------|----------|
/// | 1 | 0 | 5 | 1 |
/// | 2 | 1 | 3 | 2 |
/// | 3 | 2 | 8 | 1 |
pub fn sample_workload() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5).with_priority(1),
        Process::new(2, 1, 3).with_priority(2),
        Process::new(3, 2, 8).with_priority(1),
    ]
}

/// Random workload source.
///
/// Generates arrival-sorted process sets within configured bounds.
/// Deterministic for a given RNG seed, so comparison experiments can be
/// replayed.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use sched_sim::models::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let workload = WorkloadGenerator::new(10).generate(&mut rng);
/// assert_eq!(workload.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: u64,
    min_burst: u64,
    max_burst: u64,
    max_priority: u32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default bounds:
    /// arrivals in 0..=10, bursts in 1..=10, priorities in 0..=3.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 3,
        }
    }

    /// Sets the latest possible arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: u64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range. The lower bound is clamped to 1 — a burst
    /// of 0 is never generated.
    pub fn with_burst_range(mut self, min_burst: u64, max_burst: u64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Sets the highest (numerically largest) priority value.
    pub fn with_max_priority(mut self, max_priority: u32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates a workload sorted by arrival time, ties by pid.
    ///
    /// Pids are assigned 1..=count before sorting, so they identify
    /// processes but carry no arrival-order meaning.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let mut workload: Vec<Process> = (0..self.count)
            .map(|i| {
                Process::new(
                    i as u32 + 1,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
                .with_priority(rng.random_range(0..=self.max_priority))
            })
            .collect();
        workload.sort_by_key(|p| (p.arrival, p.pid));
        workload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_workload() {
        let w = sample_workload();
        assert_eq!(w.len(), 3);
        assert_eq!(w[0].pid, 1);
        assert_eq!(w[1].arrival, 1);
        assert_eq!(w[2].burst, 8);
        // Already sorted by arrival
        assert!(w.windows(2).all(|p| p[0].arrival <= p[1].arrival));
    }

    #[test]
    fn test_generate_respects_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(50)
            .with_max_arrival(20)
            .with_burst_range(2, 6)
            .with_max_priority(1);
        let workload = generator.generate(&mut rng);

        assert_eq!(workload.len(), 50);
        for p in &workload {
            assert!(p.arrival <= 20);
            assert!((2..=6).contains(&p.burst));
            assert!(p.priority <= 1);
        }
    }

    #[test]
    fn test_generate_sorted_with_unique_pids() {
        let mut rng = SmallRng::seed_from_u64(1);
        let workload = WorkloadGenerator::new(30).generate(&mut rng);

        assert!(workload
            .windows(2)
            .all(|p| (p[0].arrival, p[0].pid) <= (p[1].arrival, p[1].pid)));
        let pids: HashSet<u32> = workload.iter().map(|p| p.pid).collect();
        assert_eq!(pids.len(), 30);
    }

    #[test]
    fn test_generate_deterministic_per_seed() {
        let generator = WorkloadGenerator::new(10);
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_burst_lower_bound_clamped() {
        let mut rng = SmallRng::seed_from_u64(3);
        let generator = WorkloadGenerator::new(20).with_burst_range(0, 3);
        assert!(generator.generate(&mut rng).iter().all(|p| p.burst >= 1));
    }

    #[test]
    fn test_process_json_round_trip() {
        let workload = sample_workload();
        let json = serde_json::to_string(&workload).unwrap();
        let back: Vec<Process> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, workload);
    }
}
