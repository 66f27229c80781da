//! Simulator configuration.

use serde::{Deserialize, Serialize};

use crate::scheduler::Quantum;

/// Settings shared by every simulation run of a [`Simulator`](crate::Simulator).
///
/// # Example
/// ```
/// use u_procsched::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_default_quantum(4)
///     .with_merge_slices(true);
/// assert_eq!(config.default_quantum, 4);
/// assert!(config.audit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-Robin quantum used when a request omits one.
    pub default_quantum: i64,
    /// Coalesce back-to-back slices of the same process in results.
    pub merge_slices: bool,
    /// Re-check every produced schedule before returning it.
    pub audit: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_quantum: Quantum::DEFAULT_UNITS,
            merge_slices: false,
            audit: true,
        }
    }
}

impl SimulationConfig {
    /// Sets the fallback quantum.
    pub fn with_default_quantum(mut self, units: i64) -> Self {
        self.default_quantum = units;
        self
    }

    /// Enables or disables slice merging.
    pub fn with_merge_slices(mut self, merge: bool) -> Self {
        self.merge_slices = merge;
        self
    }

    /// Enables or disables the post-run audit.
    pub fn with_audit(mut self, audit: bool) -> Self {
        self.audit = audit;
        self
    }
}
