//! Selection rules for choosing the next process to run.
//!
//! The shortest-job and priority policies differ only in the key they
//! minimize over the ready set. Each key is a [`SelectionRule`]; the
//! shared [`select_ready`] applies it with one fixed tie-break chain.
//!
//! # Tie-breaking
//!
//! Candidates are ordered by `(rule key, arrival, input position)`, so a
//! winner is always unique and repeated runs over the same input produce
//! the same schedule.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{rules, select_ready};
//! use u_procsched::models::Process;
//!
//! let ready = vec![Process::new("A", 0, 8), Process::new("B", 0, 3)];
//! assert_eq!(select_ready(&rules::ShortestJob, &ready, 0), Some(1));
//! ```

pub mod rules;

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by a selection rule.
///
/// Lower keys = scheduled first.
pub type RuleKey = i64;

/// A rule ranking ready processes.
///
/// # Key Convention
/// **Lower key = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Ranks a process. Lower = runs first.
    fn key(&self, process: &Process) -> RuleKey;
}

/// Returns the index of the ready process that should run at `clock`.
///
/// A process is ready when it has arrived and has not completed.
/// Returns `None` when nothing is ready (the CPU idles).
pub fn select_ready<R>(rule: &R, processes: &[Process], clock: i64) -> Option<usize>
where
    R: SelectionRule + ?Sized,
{
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_complete() && p.has_arrived(clock))
        .min_by_key(|&(index, p)| (rule.key(p), p.arrival, index))
        .map(|(index, _)| index)
}

/// Earliest arrival among processes that have not completed.
///
/// Used to skip idle time when nothing is ready.
pub fn next_arrival(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_complete())
        .map(|p| p.arrival)
        .min()
}
