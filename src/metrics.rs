//! Aggregate simulation metrics.
//!
//! Computes standard scheduling performance indicators from a finished
//! process set and the observed total simulated time.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion − arrival) |
//! | Avg Waiting | mean(turnaround − burst) |
//! | Avg Response | mean(first start − arrival) |
//! | CPU Utilization | Σ burst / total time × 100 |
//! | Throughput | n / total time |
//! | Fairness Index | Jain's index over turnaround times |
//!
//! # Reference
//! Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness"

use crate::models::Process;

/// Aggregate performance indicators for one completed run.
///
/// Deterministic: recomputing over the same process set and total time
/// yields bit-identical values.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationMetrics {
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean response time (ticks).
    pub avg_response: f64,
    /// Fraction of the run the CPU was busy, as a percentage.
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Jain's fairness index over turnaround times, in (0, 1].
    pub fairness_index: f64,
}

impl SimulationMetrics {
    /// Computes metrics from a completed process set.
    ///
    /// Expects every process to have run to completion (all timing
    /// fields populated) and `total_time` to be the observed span of the
    /// run, typically [`observed_total_time`]. An empty process set
    /// yields the all-zero record. Zero `total_time` yields zero
    /// utilization and throughput; all-zero turnarounds yield zero
    /// fairness — the guards of a division-free degenerate result.
    pub fn calculate(processes: &[Process], total_time: u64) -> Self {
        let n = processes.len();
        if n == 0 {
            return Self::zero();
        }

        let mut total_turnaround: f64 = 0.0;
        let mut total_waiting: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let mut total_burst: f64 = 0.0;
        let mut sum_sq_turnaround: f64 = 0.0;

        for p in processes {
            let turnaround = p.turnaround().unwrap_or(0) as f64;
            total_turnaround += turnaround;
            total_waiting += p.waiting().unwrap_or(0) as f64;
            total_response += p.response().unwrap_or(0) as f64;
            total_burst += p.burst as f64;
            sum_sq_turnaround += turnaround * turnaround;
        }

        let (cpu_utilization, throughput) = if total_time > 0 {
            (
                total_burst / total_time as f64 * 100.0,
                n as f64 / total_time as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let fairness_index = if sum_sq_turnaround > 0.0 {
            (total_turnaround * total_turnaround) / (n as f64 * sum_sq_turnaround)
        } else {
            0.0
        };

        Self {
            avg_turnaround: total_turnaround / n as f64,
            avg_waiting: total_waiting / n as f64,
            avg_response: total_response / n as f64,
            cpu_utilization,
            throughput,
            fairness_index,
        }
    }

    /// Metrics over the run's own observed span — the convenience form
    /// reference drivers use after a policy run.
    pub fn from_run(processes: &[Process]) -> Self {
        Self::calculate(processes, observed_total_time(processes))
    }

    fn zero() -> Self {
        Self {
            avg_turnaround: 0.0,
            avg_waiting: 0.0,
            avg_response: 0.0,
            cpu_utilization: 0.0,
            throughput: 0.0,
            fairness_index: 0.0,
        }
    }
}

/// Maximum completion time across the process set; 0 when none finished.
pub fn observed_total_time(processes: &[Process]) -> u64 {
    processes
        .iter()
        .filter_map(|p| p.completion)
        .max()
        .unwrap_or(0)
}
