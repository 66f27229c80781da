//! Random workload generation.
//!
//! Produces process descriptors for demos, benchmarks, and property
//! tests. Generation is fully driven by the caller's RNG, so a seeded
//! RNG yields the same workload every time.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_procsched::workload::{generate, WorkloadConfig};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let specs = generate(&WorkloadConfig::default().with_count(5), &mut rng);
//! assert_eq!(specs.len(), 5);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Pid, ProcessSpec};

/// Shape of a generated workload.
///
/// All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time.
    pub max_arrival: i64,
    /// Shortest burst.
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Most urgent priority.
    pub min_priority: i64,
    /// Least urgent priority.
    pub max_priority: i64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            min_priority: 0,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Sets the process count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min_priority: i64, max_priority: i64) -> Self {
        self.min_priority = min_priority;
        self.max_priority = max_priority;
        self
    }
}

/// Generates `config.count` valid descriptors named `P1`..`Pn`.
///
/// Out-of-range bounds are clamped so every descriptor passes
/// validation: arrivals start at 0, bursts at 1, and an inverted range
/// collapses to its lower bound.
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<ProcessSpec> {
    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_priority = config.max_priority.max(config.min_priority);

    (1..=config.count)
        .map(|i| ProcessSpec {
            pid: Some(Pid::Name(format!("P{i}"))),
            arrival: Some(rng.random_range(0..=max_arrival)),
            burst: Some(rng.random_range(min_burst..=max_burst)),
            priority: Some(rng.random_range(config.min_priority..=max_priority)),
        })
        .collect()
}
