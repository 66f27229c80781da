//! CPU process-scheduling simulator.
//!
//! Simulates classical uniprocessor scheduling policies over integer time
//! units and reports per-process timing metrics plus an execution
//! timeline (Gantt chart).
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Process`, `ProcessSpec`, `Pid`, `Slice`,
//!   `Timeline`, `ProcessOutcome`)
//! - **`dispatching`**: Selection rules (SJF, SRTF, priority) and tie-breaking
//! - **`scheduler`**: Policies (FCFS, SJF, SRTF, Priority in both forms,
//!   Round-Robin) and `ScheduleKpi`
//! - **`validation`**: Input checks and post-run schedule audit
//! - **`simulation`**: `Simulator`, the validated entry point
//! - **`boundary`**: JSON request/response handling with status mapping
//! - **`workload`**: Seeded random workload generation
//!
//! # Architecture
//!
//! Policies are pure functions over owned process records. The simulator
//! owns validation, auditing, and aggregation; the boundary owns wire
//! encoding. Nothing is shared between runs.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod boundary;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use models::{Pid, Process, ProcessOutcome, ProcessSpec, Slice, Timeline};
pub use scheduler::{Algorithm, Quantum, ScheduleKpi};
pub use simulation::{SimulationRequest, SimulationResult, Simulator};
