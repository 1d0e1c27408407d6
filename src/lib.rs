//! CPU scheduling policy simulator.
//!
//! Replays one workload — an ordered set of processes with arrival
//! times, CPU bursts, and priorities — under classic scheduling policies
//! at one-tick resolution, and reports per-process timings, the
//! execution timeline, and aggregate metrics. Built for comparing how
//! FIFO, SJF, STCF, Round Robin, and MLFQ treat the same process set.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Process`, `Slice`/`Timeline`,
//!   workload construction
//! - **`policies`**: the `SchedulingPolicy` trait and the five policies
//! - **`metrics`**: `SimulationMetrics` — turnaround/waiting/response
//!   averages, utilization, throughput, Jain's fairness index
//! - **`validation`**: fail-fast input integrity checks
//!
//! # Example
//!
//! ```
//! use sched_sim::metrics::SimulationMetrics;
//! use sched_sim::models::sample_workload;
//! use sched_sim::policies::{RoundRobin, SchedulingPolicy};
//! use sched_sim::validation::validate_workload;
//!
//! let mut workload = sample_workload();
//! validate_workload(&workload).expect("workload is well-formed");
//!
//! let timeline = RoundRobin::default().run(&mut workload);
//! let metrics = SimulationMetrics::from_run(&workload);
//!
//! assert_eq!(timeline.busy_time(), 16);
//! assert!(metrics.fairness_index > 0.0 && metrics.fairness_index <= 1.0);
//! ```
//!
//! The engine is single-threaded and deterministic: a policy run owns
//! the process slice it is given, and identical inputs always produce
//! identical timelines and metrics.
//!
//! # References
//!
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness"

pub mod metrics;
pub mod models;
pub mod policies;
pub mod validation;
