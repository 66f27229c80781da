//! Process-scheduling domain models.
//!
//! Provides the core data types shared by every scheduling policy:
//! the inbound process descriptor, the mutable per-run process record,
//! the execution timeline, and the per-process outcome.
//!
//! # Lifecycle
//!
//! | Type | Created by | Owned by |
//! |------|-----------|----------|
//! | `ProcessSpec` | Caller / request boundary | Request |
//! | `Process` | Validation (`build_processes`) | One algorithm invocation |
//! | `Timeline` | Algorithm | Simulation result |
//! | `ProcessOutcome` | Simulator | Simulation result |

mod outcome;
mod process;
mod timeline;

pub use outcome::ProcessOutcome;
pub use process::{Pid, Process, ProcessSpec};
pub use timeline::{Slice, Timeline};
