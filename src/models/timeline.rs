//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of CPU slices produced by a simulation.
//! Idle gaps are implicit: they are the holes between consecutive slices.

use serde::{Deserialize, Serialize};

use super::Pid;

/// One contiguous stretch of CPU time given to a process.
///
/// Serialized as a `[pid, start, end]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Pid, i64, i64)", into = "(Pid, i64, i64)")]
pub struct Slice {
    /// Process that ran.
    pub pid: Pid,
    /// First instant of the slice.
    pub start: i64,
    /// End of the slice (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(pid: impl Into<Pid>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl From<(Pid, i64, i64)> for Slice {
    fn from((pid, start, end): (Pid, i64, i64)) -> Self {
        Self { pid, start, end }
    }
}

impl From<Slice> for (Pid, i64, i64) {
    fn from(s: Slice) -> Self {
        (s.pid, s.start, s.end)
    }
}

/// Ordered sequence of slices in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Empty slices (`start >= end`) are dropped.
    pub fn push(&mut self, pid: Pid, start: i64, end: i64) {
        if start < end {
            self.slices.push(Slice { pid, start, end });
        }
    }

    /// All slices in execution order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Iterates slices in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was running some process, saturating at `i64::MAX`.
    pub fn busy_time(&self) -> i64 {
        total_duration(self.slices.iter())
    }

    /// Time between t=0 and the makespan during which the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Total CPU time given to `pid`, saturating at `i64::MAX`.
    pub fn executed_by(&self, pid: &Pid) -> i64 {
        total_duration(self.slices.iter().filter(|s| &s.pid == pid))
    }

    /// Slices belonging to `pid`, in execution order.
    pub fn slices_for(&self, pid: &Pid) -> Vec<&Slice> {
        self.slices.iter().filter(|s| &s.pid == pid).collect()
    }

    /// Number of times the CPU moved from one process to a different one.
    ///
    /// Idle gaps between two slices of the same process do not count.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Coalesces back-to-back slices of the same process.
    ///
    /// Only touching slices (`prev.end == next.start`) are joined, so idle
    /// gaps stay visible.
    pub fn merged(&self) -> Timeline {
        let mut slices: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match slices.last_mut() {
                Some(last) if last.pid == slice.pid && last.end == slice.start => {
                    last.end = slice.end;
                }
                _ => slices.push(slice.clone()),
            }
        }
        Timeline { slices }
    }
}

impl From<Vec<Slice>> for Timeline {
    fn from(slices: Vec<Slice>) -> Self {
        Self { slices }
    }
}

impl IntoIterator for Timeline {
    type Item = Slice;
    type IntoIter = std::vec::IntoIter<Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

fn total_duration<'a>(slices: impl Iterator<Item = &'a Slice>) -> i64 {
    slices.fold(0i64, |total, s| total.saturating_add(s.duration()))
}
