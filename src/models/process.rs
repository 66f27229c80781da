//! Process (job) model.
//!
//! A process is the unit of work handed to the CPU. It arrives at some
//! instant, needs a fixed amount of CPU time (its burst), and carries a
//! priority used by the priority-driven policies.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque process identifier.
///
/// Requests may identify processes by name (`"P1"`) or by number (`1`);
/// both forms are kept as given and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pid {
    /// Numeric identifier.
    Num(i64),
    /// Textual identifier.
    Name(String),
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pid::Num(n) => write!(f, "{n}"),
            Pid::Name(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Pid {
    fn from(s: &str) -> Self {
        Pid::Name(s.to_string())
    }
}

impl From<String> for Pid {
    fn from(s: String) -> Self {
        Pid::Name(s)
    }
}

impl From<i64> for Pid {
    fn from(n: i64) -> Self {
        Pid::Num(n)
    }
}

/// A process descriptor as supplied by a caller.
///
/// Every field is optional so that missing data can be reported as a
/// validation error naming the process, instead of failing deserialization
/// for the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessSpec {
    /// Process identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<Pid>,
    /// Arrival time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<i64>,
    /// CPU time required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burst: Option<i64>,
    /// Priority (lower = more urgent). `None` = 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl ProcessSpec {
    /// Creates a fully specified descriptor with default priority.
    pub fn new(pid: impl Into<Pid>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: Some(pid.into()),
            arrival: Some(arrival),
            burst: Some(burst),
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Scheduling state of one simulated process.
///
/// Created fresh for every simulation run and mutated in place by exactly
/// one algorithm invocation.
///
/// # Invariants
/// - `burst >= 1`, `arrival >= 0`
/// - `0 <= remaining <= burst`
/// - `completion_time` is set once, when `remaining` reaches 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = higher priority).
    pub priority: i64,
    /// CPU time still owed.
    pub remaining: i64,
    /// Time of first dispatch. `None` = never ran.
    pub start_time: Option<i64>,
    /// Time at which `remaining` reached 0.
    pub completion_time: Option<i64>,
}

impl Process {
    /// Creates a process with priority 0 and full remaining burst.
    pub fn new(pid: impl Into<Pid>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            start_time: None,
            completion_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process is eligible to run at `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Runs the process for up to `units` time units starting at `clock`.
    ///
    /// Records the first dispatch, charges the executed time against
    /// `remaining`, and stamps the completion time when nothing is left.
    /// Returns the end of the executed slice, saturating at `i64::MAX`.
    pub fn execute(&mut self, clock: i64, units: i64) -> i64 {
        let units = units.clamp(0, self.remaining);
        if self.start_time.is_none() {
            self.start_time = Some(clock);
        }
        self.remaining -= units;
        let end = clock.saturating_add(units);
        if self.remaining == 0 && self.completion_time.is_none() {
            self.completion_time = Some(end);
        }
        end
    }

    /// Completion time minus arrival time.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival)
    }

    /// Turnaround time minus burst: time spent ready but not running.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst)
    }

    /// Delay between arrival and first dispatch.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival)
    }
}
