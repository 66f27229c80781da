//! Per-process outcome of a finished simulation.

use serde::{Deserialize, Serialize};

use super::{Pid, Process};

/// Timing metrics of one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time.
    pub arrival: i64,
    /// CPU time consumed.
    pub burst: i64,
    /// Priority the process ran with.
    pub priority: i64,
    /// First dispatch.
    pub start_time: i64,
    /// Completion instant.
    pub completion_time: i64,
    /// `completion_time - arrival`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst`.
    pub waiting_time: i64,
    /// `start_time - arrival`.
    pub response_time: i64,
}

impl ProcessOutcome {
    /// Extracts the outcome of a finished process.
    ///
    /// Returns `None` if the process never ran to completion.
    pub fn from_process(process: &Process) -> Option<Self> {
        let start_time = process.start_time?;
        let completion_time = process.completion_time?;
        let turnaround_time = completion_time - process.arrival;
        Some(Self {
            pid: process.pid.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst,
            response_time: start_time - process.arrival,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_finished_process() {
        let mut p = Process::new("A", 2, 4).with_priority(1);
        p.execute(3, 2);
        p.execute(8, 2);

        let o = ProcessOutcome::from_process(&p).unwrap();
        assert_eq!(o.start_time, 3);
        assert_eq!(o.completion_time, 10);
        assert_eq!(o.turnaround_time, 8);
        assert_eq!(o.waiting_time, 4);
        assert_eq!(o.response_time, 1);
        assert_eq!(o.priority, 1);
    }

    #[test]
    fn test_outcome_unfinished() {
        let mut p = Process::new("A", 0, 4);
        assert!(ProcessOutcome::from_process(&p).is_none());
        p.execute(0, 1);
        assert!(ProcessOutcome::from_process(&p).is_none());
    }
}
