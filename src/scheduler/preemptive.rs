//! Preemptive rule-driven scheduling (SRTF, preemptive Priority).
//!
//! # Algorithm
//!
//! Time advances one unit at a time. Each unit:
//! 1. Pick the ready process with the lowest rule key (ties: earliest
//!    arrival, then input position).
//! 2. Run it for exactly one unit and emit a one-unit slice.
//! 3. Retire it when nothing remains.
//!
//! When nothing is ready the clock skips to the next arrival without
//! emitting a slice. The decision is re-made every unit, so a newly
//! arrived process with a lower key preempts the running one.
//!
//! # Complexity
//! O(B · n) where B = total burst.

use tracing::trace;

use super::Execution;
use crate::dispatching::{next_arrival, select_ready, SelectionRule};
use crate::models::{Process, Timeline};

/// Schedules `processes` with per-unit preemption, ordered by `rule`.
///
/// The timeline holds one slice per executed unit; use
/// [`Timeline::merged`] for presentation. Completed records are returned
/// in completion order.
pub fn schedule<R>(rule: &R, processes: Vec<Process>) -> Execution
where
    R: SelectionRule + ?Sized,
{
    let mut pending = processes;
    let mut completed = Vec::with_capacity(pending.len());
    let mut timeline = Timeline::new();
    let mut clock = 0;

    while !pending.is_empty() {
        let Some(index) = select_ready(rule, &pending, clock) else {
            match next_arrival(&pending) {
                Some(arrival) => {
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = &mut pending[index];
        let end = process.execute(clock, 1);
        trace!(rule = rule.name(), pid = %process.pid, start = clock, end, "tick");
        timeline.push(process.pid.clone(), clock, end);
        clock = end;

        if process.is_complete() {
            completed.push(pending.remove(index));
        }
    }

    Execution {
        timeline,
        completed,
    }
}
