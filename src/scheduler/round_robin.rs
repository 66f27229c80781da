//! Round-Robin.
//!
//! # Algorithm
//!
//! 1. Build a FIFO ready queue with every process, in input order.
//! 2. Pop the front; if it has not arrived yet, jump the clock to its
//!    arrival.
//! 3. Run it for `min(remaining, quantum)` units.
//! 4. Re-enqueue it at the back if work remains, otherwise retire it.
//!
//! # Queue Model
//! Arrival only matters for the initial queue position and the idle jump
//! on first dispatch. Unlike textbook Round-Robin, a process arriving
//! while another runs is *not* placed ahead of the re-queued runner.
//!
//! # Complexity
//! O(B / q + n) queue operations, B = total burst, q = quantum.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;
use tracing::trace;

use super::Execution;
use crate::error::SimulationError;
use crate::models::{Process, Timeline};

/// Round-Robin time slice, at least one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantum(i64);

impl Quantum {
    /// Quantum used when a request does not give one.
    pub const DEFAULT_UNITS: i64 = 2;

    /// Creates a quantum, rejecting values below 1.
    pub fn new(units: i64) -> Result<Self, SimulationError> {
        if units < 1 {
            return Err(SimulationError::InvalidQuantum(units));
        }
        Ok(Self(units))
    }

    /// Slice length in time units.
    #[inline(always)]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(Self::DEFAULT_UNITS)
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = i64::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

/// Schedules `processes` round-robin with the given quantum.
///
/// Completed records are returned in completion order.
pub fn schedule(processes: Vec<Process>, quantum: Quantum) -> Execution {
    let mut queue: VecDeque<Process> = processes.into();
    let mut completed = Vec::with_capacity(queue.len());
    let mut timeline = Timeline::new();
    let mut clock = 0;

    while let Some(mut process) = queue.pop_front() {
        let start = clock.max(process.arrival);
        clock = process.execute(start, quantum.get());
        trace!(pid = %process.pid, start, end = clock, remaining = process.remaining, "rr slice");
        timeline.push(process.pid.clone(), start, clock);

        if process.is_complete() {
            completed.push(process);
        } else {
            queue.push_back(process);
        }
    }

    Execution {
        timeline,
        completed,
    }
}
