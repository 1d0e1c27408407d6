//! Input validation for simulation runs.
//!
//! The policies themselves trust their inputs; this module is the
//! fail-fast gate callers run first. Checks workload integrity
//! (positive bursts, unique pids, capacity, arrival ordering) and
//! policy parameters (quantum, MLFQ configuration). Violations are
//! reported, never repaired.

use std::collections::HashSet;

use crate::models::{Process, MAX_PROCESSES};
use crate::policies::MlfqConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has a burst time of zero.
    ZeroBurst,
    /// Two processes share the same pid.
    DuplicatePid,
    /// The workload exceeds the bounded process capacity.
    CapacityExceeded,
    /// The workload is not sorted by arrival time (FIFO's precondition).
    UnsortedArrivals,
    /// A time quantum of zero.
    ZeroQuantum,
    /// An MLFQ configuration with no levels.
    NoLevels,
    /// A priority-boost interval of zero.
    ZeroBoostInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload before a policy run.
///
/// Checks:
/// 1. Process count within [`MAX_PROCESSES`]
/// 2. Every burst time > 0
/// 3. No duplicate pids
/// 4. Arrivals in non-decreasing order
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.len() > MAX_PROCESSES {
        errors.push(ValidationError::new(
            ValidationErrorKind::CapacityExceeded,
            format!(
                "process count {} exceeds capacity {MAX_PROCESSES}",
                processes.len()
            ),
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("invalid burst time for pid {}", p.pid),
            ));
        }
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("duplicate pid {}", p.pid),
            ));
        }
    }

    if processes.windows(2).any(|w| w[0].arrival > w[1].arrival) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsortedArrivals,
            "workload is not sorted by arrival time",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: u64) -> ValidationResult {
    if quantum == 0 {
        Err(vec![ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "time quantum must be positive",
        )])
    } else {
        Ok(())
    }
}

/// Validates an MLFQ configuration: at least one level, every level
/// quantum positive, positive boost interval.
pub fn validate_mlfq_config(config: &MlfqConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.quantums.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoLevels,
            "MLFQ needs at least one priority level",
        ));
    }
    for (level, &quantum) in config.quantums.iter().enumerate() {
        if quantum == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroQuantum,
                format!("invalid quantum at level {level}"),
            ));
        }
    }
    if config.boost_interval == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroBoostInterval,
            "boost interval must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_workload;

    #[test]
    fn test_valid_workload() {
        assert!(validate_workload(&sample_workload()).is_ok());
        assert!(validate_workload(&[]).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let workload = vec![Process::new(1, 0, 0)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
        assert!(errors[0].message.contains("pid 1"));
    }

    #[test]
    fn test_duplicate_pid() {
        let workload = vec![Process::new(7, 0, 2), Process::new(7, 1, 3)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_capacity_exceeded() {
        let workload: Vec<Process> = (0..=MAX_PROCESSES as u32)
            .map(|i| Process::new(i, 0, 1))
            .collect();
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CapacityExceeded));
    }

    #[test]
    fn test_unsorted_arrivals() {
        let workload = vec![Process::new(1, 5, 2), Process::new(2, 3, 2)];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnsortedArrivals));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let workload = vec![
            Process::new(1, 5, 0), // zero burst
            Process::new(1, 3, 2), // duplicate pid + unsorted
        ];
        let errors = validate_workload(&workload).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(3).is_ok());
        let errors = validate_quantum(0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroQuantum);
    }

    #[test]
    fn test_mlfq_config_valid() {
        assert!(validate_mlfq_config(&MlfqConfig::default()).is_ok());
    }

    #[test]
    fn test_mlfq_config_no_levels() {
        let errors = validate_mlfq_config(&MlfqConfig::new(vec![], 10)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoLevels));
    }

    #[test]
    fn test_mlfq_config_zero_quantum_names_level() {
        let errors = validate_mlfq_config(&MlfqConfig::new(vec![2, 0, 8], 10)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroQuantum && e.message.contains("level 1")));
    }

    #[test]
    fn test_mlfq_config_zero_boost() {
        let errors = validate_mlfq_config(&MlfqConfig::new(vec![2], 0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBoostInterval));
    }
}
