//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (equal arrivals keep input order).
//! 2. For each process, jump the clock over any idle gap to its arrival.
//! 3. Run it to completion in one slice.
//!
//! # Complexity
//! O(n log n) for the sort.

use tracing::trace;

use super::Execution;
use crate::models::{Process, Timeline};

/// Schedules `processes` in arrival order.
///
/// Completed records are returned in arrival order.
pub fn schedule(mut processes: Vec<Process>) -> Execution {
    processes.sort_by_key(|p| p.arrival);

    let mut timeline = Timeline::new();
    let mut clock = 0;

    for process in &mut processes {
        let start = clock.max(process.arrival);
        clock = process.execute(start, process.remaining);
        trace!(pid = %process.pid, start, end = clock, "fcfs dispatch");
        timeline.push(process.pid.clone(), start, clock);
    }

    Execution {
        timeline,
        completed: processes,
    }
}
