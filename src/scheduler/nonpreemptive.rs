//! Non-preemptive rule-driven scheduling (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. At each decision point, pick the ready process with the lowest rule
//!    key (ties: earliest arrival, then input position).
//! 2. If nothing is ready, skip the idle stretch to the next arrival.
//! 3. Run the chosen process to completion in one slice.
//!
//! # Complexity
//! O(n²): one linear scan of the pending set per decision.

use tracing::trace;

use super::Execution;
use crate::dispatching::{next_arrival, select_ready, SelectionRule};
use crate::models::{Process, Timeline};

/// Schedules `processes` without preemption, ordered by `rule`.
///
/// Completed records are returned in completion order.
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

        // Vec::remove keeps the relative order used for tie-breaking
        let mut process = pending.remove(index);
        let start = clock;
        clock = process.execute(start, process.remaining);
        trace!(rule = rule.name(), pid = %process.pid, start, end = clock, "dispatch");
        timeline.push(process.pid.clone(), start, clock);
        completed.push(process);
    }

    Execution {
        timeline,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{HighestPriority, ShortestJob};
    use crate::models::Slice;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        // A holds the CPU from 0; at 8 both B and C are ready, C is shorter
        let exec = schedule(
            &ShortestJob,
            vec![
                Process::new("A", 0, 8),
                Process::new("B", 1, 4),
                Process::new("C", 2, 2),
            ],
        );
        assert_eq!(
            exec.timeline.slices(),
            &[
                Slice::new("A", 0, 8),
                Slice::new("C", 8, 10),
                Slice::new("B", 10, 14),
            ]
        );
        let waiting: Vec<i64> = exec
            .completed
            .iter()
            .map(|p| p.waiting_time().unwrap())
            .collect();
        assert_eq!(waiting, vec![0, 6, 9]);
    }

    #[test]
    fn test_sjf_is_not_preemptive() {
        let exec = schedule(
            &ShortestJob,
            vec![Process::new("long", 0, 10), Process::new("short", 1, 1)],
        );
        assert_eq!(exec.timeline.slices()[0], Slice::new("long", 0, 10));
    }

    #[test]
    fn test_sjf_idle_until_first_arrival() {
        let exec = schedule(
            &ShortestJob,
            vec![Process::new("A", 5, 3), Process::new("B", 5, 1)],
        );
        assert_eq!(
            exec.timeline.slices(),
            &[Slice::new("B", 5, 6), Slice::new("A", 6, 9)]
        );
    }

    #[test]
    fn test_sjf_idle_gap_between_jobs() {
        let exec = schedule(
            &ShortestJob,
            vec![Process::new("A", 0, 2), Process::new("B", 10, 1)],
        );
        assert_eq!(
            exec.timeline.slices(),
            &[Slice::new("A", 0, 2), Slice::new("B", 10, 11)]
        );
    }

    #[test]
    fn test_sjf_tie_break() {
        // equal bursts: earlier arrival first, then input position
        let exec = schedule(
            &ShortestJob,
            vec![
                Process::new("first", 0, 5),
                Process::new("Y", 2, 3),
                Process::new("X", 1, 3),
                Process::new("Z", 1, 3),
            ],
        );
        let order: Vec<String> = exec.timeline.iter().map(|s| s.pid.to_string()).collect();
        assert_eq!(order, vec!["first", "X", "Z", "Y"]);
    }

    #[test]
    fn test_priority_order() {
        let exec = schedule(
            &HighestPriority,
            vec![
                Process::new("A", 0, 4).with_priority(3),
                Process::new("B", 1, 3).with_priority(1),
                Process::new("C", 2, 2).with_priority(2),
            ],
        );
        assert_eq!(
            exec.timeline.slices(),
            &[
                Slice::new("A", 0, 4),
                Slice::new("B", 4, 7),
                Slice::new("C", 7, 9),
            ]
        );
        let turnaround: Vec<i64> = exec
            .completed
            .iter()
            .map(|p| p.turnaround_time().unwrap())
            .collect();
        assert_eq!(turnaround, vec![4, 6, 7]);
    }

    #[test]
    fn test_priority_tie_break() {
        // at t=3 Z, X, Y share priority 1: earlier arrival first, then input position
        let exec = schedule(
            &HighestPriority,
            vec![
                Process::new("first", 0, 3).with_priority(0),
                Process::new("Y", 2, 2).with_priority(1),
                Process::new("Z", 1, 2).with_priority(1),
                Process::new("X", 1, 2).with_priority(1),
                Process::new("W", 1, 1).with_priority(2),
            ],
        );
        let order: Vec<String> = exec.timeline.iter().map(|s| s.pid.to_string()).collect();
        assert_eq!(order, vec!["first", "Z", "X", "Y", "W"]);
    }
}
