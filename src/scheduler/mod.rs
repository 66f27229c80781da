//! CPU scheduling policies and KPI evaluation.
//!
//! Every policy is a free function taking an owned set of fresh
//! [`Process`] records and returning an [`Execution`]: the timeline plus
//! the completed records. [`Algorithm`] selects one of them by name.
//!
//! # Policies
//!
//! | Name | Preemptive | Selection |
//! |------|-----------|-----------|
//! | `FCFS` | no | arrival order |
//! | `SJF` | no | shortest burst |
//! | `SJF-Preemptive` | per unit | shortest remaining time |
//! | `Priority` | no | lowest priority value |
//! | `Priority-Preemptive` | per unit | lowest priority value |
//! | `RR` | per quantum | FIFO queue |
//!
//! # KPI
//!
//! `ScheduleKpi` computes waiting, turnaround, and response averages plus
//! CPU utilization, throughput, and context switches.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod fcfs;
mod kpi;
pub mod nonpreemptive;
pub mod preemptive;
pub mod round_robin;

pub use kpi::ScheduleKpi;
pub use round_robin::Quantum;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::dispatching::rules;
use crate::error::SimulationError;
use crate::models::{Process, Timeline};

/// Output of one policy run.
#[derive(Debug, Clone, Default)]
pub struct Execution {
    /// Slices in execution order.
    pub timeline: Timeline,
    /// Finished records, in the order the policy reports them.
    pub completed: Vec<Process>,
}

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First.
    SjfPreemptive,
    /// Priority, non-preemptive.
    Priority,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Round-Robin.
    RoundRobin,
}

impl Algorithm {
    /// Every policy, in display order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::SjfPreemptive,
        Algorithm::Priority,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Canonical request name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::SjfPreemptive => "SJF-Preemptive",
            Self::Priority => "Priority",
            Self::PriorityPreemptive => "Priority-Preemptive",
            Self::RoundRobin => "RR",
        }
    }

    /// Whether a running process can be interrupted.
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::SjfPreemptive | Self::PriorityPreemptive | Self::RoundRobin
        )
    }

    /// Whether the policy reads the quantum.
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Runs the policy over `processes`.
    ///
    /// `quantum` is ignored by every policy except Round-Robin.
    pub fn run(&self, processes: Vec<Process>, quantum: Quantum) -> Execution {
        match self {
            Self::Fcfs => fcfs::schedule(processes),
            Self::Sjf => nonpreemptive::schedule(&rules::ShortestJob, processes),
            Self::SjfPreemptive => preemptive::schedule(&rules::ShortestRemaining, processes),
            Self::Priority => nonpreemptive::schedule(&rules::HighestPriority, processes),
            Self::PriorityPreemptive => {
                preemptive::schedule(&rules::HighestPriority, processes)
            }
            Self::RoundRobin => round_robin::schedule(processes, quantum),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Parses a canonical name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SimulationError::InvalidAlgorithm(s.to_string()))
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!(
            "SJF-Preemptive".parse::<Algorithm>().unwrap(),
            Algorithm::SjfPreemptive
        );
        assert_eq!(
            "priority-preemptive".parse::<Algorithm>().unwrap(),
            Algorithm::PriorityPreemptive
        );
        assert_eq!(" RR ".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(
            "LIFO".parse::<Algorithm>().unwrap_err(),
            SimulationError::InvalidAlgorithm("LIFO".into())
        );
    }

    #[test]
    fn test_algorithm_round_trips_by_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), algorithm);
        }
    }

    #[test]
    fn test_algorithm_traits() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Priority.is_preemptive());
        assert!(Algorithm::SjfPreemptive.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(Algorithm::RoundRobin.uses_quantum());
        assert!(!Algorithm::Sjf.uses_quantum());
    }

    #[test]
    fn test_run_dispatches_to_policy() {
        let procs = || vec![Process::new("A", 0, 8), Process::new("B", 1, 4)];

        let np = Algorithm::Sjf.run(procs(), Quantum::default());
        assert_eq!(np.timeline.len(), 2);

        let p = Algorithm::SjfPreemptive.run(procs(), Quantum::default());
        assert_eq!(p.timeline.len(), 12); // one slice per unit

        let rr = Algorithm::RoundRobin.run(procs(), Quantum::new(4).unwrap());
        assert_eq!(rr.timeline.len(), 3); // A 0..4, B 4..8, A 8..12
    }
}
