//! Input validation and schedule auditing.
//!
//! Checks process descriptors before scheduling. Detects:
//! - An empty process set
//! - Missing `pid`, `arrival`, or `burst`
//! - Non-positive bursts and negative arrivals
//! - Duplicate process IDs
//! - Workloads whose latest arrival plus total burst leaves the `i64` range
//!
//! After scheduling, [`audit_schedule`] re-checks the produced timeline
//! and completed records against the structural guarantees every policy
//! must honor (each process finished once, slices ordered and disjoint,
//! executed time equal to burst, non-negative waiting time).

use crate::models::{Pid, Process, ProcessSpec, Timeline};
use std::collections::{HashMap, HashSet};

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
    /// No processes were supplied.
    EmptyProcessSet,
    /// A required descriptor field is absent.
    MissingField,
    /// Burst below 1.
    InvalidBurst,
    /// Arrival below 0.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicatePid,
    /// Latest arrival plus total burst does not fit in `i64`.
    HorizonOverflow,
    /// A process is missing from, or repeated in, the completed set.
    IncompleteProcess,
    /// Executed time of a process differs from its burst.
    ExecutionMismatch,
    /// Slices overlap or run backwards.
    TimelineOverlap,
    /// A process finished before it could have (negative waiting time).
    NegativeWaiting,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates process descriptors.
///
/// Checks:
/// 1. At least one process
/// 2. `pid`, `arrival`, `burst` present
/// 3. `burst >= 1`
/// 4. `arrival >= 0`
/// 5. No duplicate pids
/// 6. Latest arrival plus total burst fits in `i64`, so no clock value
///    a policy can reach overflows
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(specs: &[ProcessSpec]) -> ValidationResult {
    if specs.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "No processes to schedule",
        )]);
    }

    let mut errors = Vec::new();
    let mut seen: HashSet<&Pid> = HashSet::new();

    for (index, spec) in specs.iter().enumerate() {
        let label = match &spec.pid {
            Some(pid) => format!("Process '{pid}'"),
            None => format!("Process at index {index}"),
        };

        for (field, present) in [
            ("pid", spec.pid.is_some()),
            ("arrival", spec.arrival.is_some()),
            ("burst", spec.burst.is_some()),
        ] {
            if !present {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    format!("{label} is missing required field '{field}'"),
                ));
            }
        }

        if let Some(burst) = spec.burst {
            if burst < 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidBurst,
                    format!("{label}: burst must be at least 1, got {burst}"),
                ));
            }
        }

        if let Some(arrival) = spec.arrival {
            if arrival < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeArrival,
                    format!("{label}: arrival must be non-negative, got {arrival}"),
                ));
            }
        }

        if let Some(pid) = &spec.pid {
            if !seen.insert(pid) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePid,
                    format!("Duplicate process ID: {pid}"),
                ));
            }
        }
    }

    if errors.is_empty() && schedule_horizon(specs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Latest arrival plus total burst exceeds the maximum time {}",
                i64::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest time any policy can reach: the latest arrival plus every burst.
///
/// `None` when the sum overflows. Missing fields count as 0.
pub fn schedule_horizon(specs: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = specs.iter().filter_map(|s| s.arrival).max().unwrap_or(0);
    specs
        .iter()
        .filter_map(|s| s.burst)
        .try_fold(latest_arrival, i64::checked_add)
}

/// Validates descriptors and turns them into fresh process records.
///
/// Input order is preserved; it is the final tie-breaker of every policy.
pub fn build_processes(specs: &[ProcessSpec]) -> Result<Vec<Process>, Vec<ValidationError>> {
    validate_input(specs)?;

    let mut processes = Vec::with_capacity(specs.len());
    for spec in specs {
        // validate_input guarantees all three are present
        if let (Some(pid), Some(arrival), Some(burst)) = (&spec.pid, spec.arrival, spec.burst) {
            processes
                .push(Process::new(pid.clone(), arrival, burst).with_priority(spec.priority.unwrap_or(0)));
        }
    }
    Ok(processes)
}

/// Audits a finished schedule.
///
/// # Arguments
/// * `expected` - pids of the input processes.
/// * `timeline` - slices produced by the policy, in execution order.
/// * `completed` - records returned by the policy.
/// * `preemptive` - whether the policy may split a process across slices.
///   Without preemption every process must run in exactly one slice.
pub fn audit_schedule(
    expected: &[Pid],
    timeline: &Timeline,
    completed: &[Process],
    preemptive: bool,
) -> ValidationResult {
    let mut errors = Vec::new();

    // Every input process completed exactly once
    let mut counts: HashMap<&Pid, usize> = expected.iter().map(|pid| (pid, 0)).collect();
    for p in completed {
        match counts.get_mut(&p.pid) {
            Some(count) => *count += 1,
            None => errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteProcess,
                format!("Unknown process '{}' in completed set", p.pid),
            )),
        }
    }
    for pid in expected {
        let count = counts.get(pid).copied().unwrap_or(0);
        if count != 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteProcess,
                format!("Process '{pid}' completed {count} times"),
            ));
        }
    }

    // Slices ordered and disjoint
    for pair in timeline.slices().windows(2) {
        if pair[1].start < pair[0].end {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimelineOverlap,
                format!(
                    "Slice ({}, {}..{}) overlaps ({}, {}..{})",
                    pair[1].pid, pair[1].start, pair[1].end, pair[0].pid, pair[0].start, pair[0].end
                ),
            ));
        }
    }

    // Per-process bookkeeping
    for p in completed {
        let executed = timeline.executed_by(&p.pid);
        if executed != p.burst || p.remaining != 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExecutionMismatch,
                format!(
                    "Process '{}' executed {executed} of {} units ({} remaining)",
                    p.pid, p.burst, p.remaining
                ),
            ));
        }
        match p.waiting_time() {
            Some(waiting) if waiting >= 0 => {}
            Some(waiting) => errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWaiting,
                format!("Process '{}' has negative waiting time {waiting}", p.pid),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteProcess,
                format!("Process '{}' has no completion time", p.pid),
            )),
        }
        let slices = timeline.slices_for(&p.pid);
        if !preemptive && slices.len() > 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExecutionMismatch,
                format!(
                    "Process '{}' ran in {} slices without preemption",
                    p.pid,
                    slices.len()
                ),
            ));
        }
        if let Some(first) = slices.first() {
            if first.start < p.arrival {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeWaiting,
                    format!(
                        "Process '{}' ran at {} before arriving at {}",
                        p.pid, first.start, p.arrival
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
