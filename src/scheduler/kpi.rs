//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a
//! finished timeline and its per-process outcomes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | Avg Response | Mean of (first dispatch - arrival) |
//! | Max Waiting | Largest single waiting time |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Changes of running process |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessOutcome, Timeline};

/// Schedule performance indicators.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// End of the last slice.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time the CPU sat idle before the makespan.
    pub idle_time: i64,
    /// Fraction of the makespan spent busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a timeline and its completed processes.
    ///
    /// Averages over an empty outcome set are 0.0 rather than NaN.
    pub fn calculate(timeline: &Timeline, outcomes: &[ProcessOutcome]) -> Self {
        let count = outcomes.len();
        let mean = |total: f64| {
            if count == 0 {
                0.0
            } else {
                total / count as f64
            }
        };

        // summed in f64: n turnarounds can exceed i64 even when each fits
        let total_waiting: f64 = outcomes.iter().map(|o| o.waiting_time as f64).sum();
        let total_turnaround: f64 = outcomes.iter().map(|o| o.turnaround_time as f64).sum();
        let total_response: f64 = outcomes.iter().map(|o| o.response_time as f64).sum();
        let max_waiting_time = outcomes.iter().map(|o| o.waiting_time).max().unwrap_or(0);

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            avg_response_time: mean(total_response),
            max_waiting_time,
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        }
    }
}
