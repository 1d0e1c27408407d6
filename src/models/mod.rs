//! Simulation domain models.
//!
//! Core data types shared by every scheduling policy: the process set a
//! run mutates, the execution timeline it produces, and workload
//! construction helpers.
//!
//! # Ownership
//!
//! The caller owns the process slice. A policy run borrows it mutably,
//! resets it, and populates its timing fields; replaying the same
//! workload under another policy needs no copying — each run re-resets.

mod process;
mod timeline;
mod workload;

pub use process::{Process, MAX_PROCESSES};
pub use timeline::{Slice, Timeline};
pub use workload::{sample_workload, WorkloadGenerator};
