//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Length-based**: SJF (total burst), SRTF (remaining burst)
//! - **Priority**: PRIORITY (lower value first)
//!
//! # Score Convention
//! All rules return lower keys for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

use super::{RuleKey, SelectionRule};
use crate::models::Process;

/// Shortest Job First.
///
/// Ranks by total burst. Minimizes average waiting time among
/// non-preemptive policies when all jobs are available at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.burst
    }
}

/// Shortest Remaining Time First.
///
/// Ranks by CPU time still owed, so a newly arrived short job
/// displaces a long one that is part-way through.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.remaining
    }
}

/// Static priority.
///
/// Lower `priority` value = more urgent.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_job() {
        let short = Process::new("short", 0, 2);
        let long = Process::new("long", 0, 9);
        assert!(ShortestJob.key(&short) < ShortestJob.key(&long));
        assert_eq!(ShortestJob.name(), "SJF");
    }

    #[test]
    fn test_shortest_remaining_tracks_progress() {
        let mut long = Process::new("long", 0, 9);
        let short = Process::new("short", 0, 3);
        assert!(ShortestRemaining.key(&short) < ShortestRemaining.key(&long));

        long.execute(0, 7); // 2 left
        assert!(ShortestRemaining.key(&long) < ShortestRemaining.key(&short));
        // total burst is unchanged
        assert!(ShortestJob.key(&short) < ShortestJob.key(&long));
    }

    #[test]
    fn test_priority_lower_value_first() {
        let urgent = Process::new("urgent", 0, 5).with_priority(1);
        let relaxed = Process::new("relaxed", 0, 5).with_priority(4);
        assert!(HighestPriority.key(&urgent) < HighestPriority.key(&relaxed));
    }

    #[test]
    fn test_priority_negative_values() {
        let p = Process::new("neg", 0, 1).with_priority(-3);
        assert_eq!(HighestPriority.key(&p), -3);
    }
}
