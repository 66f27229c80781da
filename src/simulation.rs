//! Simulation driver.
//!
//! [`Simulator`] is the single entry point for running a policy: it
//! validates the request, builds fresh process records, runs the chosen
//! [`Algorithm`], audits the produced schedule, and aggregates KPIs.
//!
//! # Validation Order
//! 1. Algorithm name (when parsing from a string)
//! 2. Quantum (Round-Robin only)
//! 3. Process descriptors
//!
//! The first failing stage short-circuits; nothing is simulated.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::models::{Pid, ProcessOutcome, ProcessSpec, Timeline};
use crate::scheduler::{Algorithm, Execution, Quantum, ScheduleKpi};
use crate::validation::{audit_schedule, build_processes};

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to run.
    pub algorithm: Algorithm,
    /// Round-Robin quantum. `None` = configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
}

impl SimulationRequest {
    /// Creates a request with no explicit quantum.
    pub fn new(algorithm: Algorithm, processes: Vec<ProcessSpec>) -> Self {
        Self {
            algorithm,
            quantum: None,
            processes,
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Result of a successful simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Quantum used (Round-Robin only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Quantum>,
    /// Execution slices in order.
    pub timeline: Timeline,
    /// Completed processes in the order the policy finished them
    /// (arrival order for FCFS).
    pub processes: Vec<ProcessOutcome>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Full KPI block.
    pub kpi: ScheduleKpi,
}

impl SimulationResult {
    /// Finds the outcome of a process.
    pub fn outcome(&self, pid: &Pid) -> Option<&ProcessOutcome> {
        self.processes.iter().find(|o| &o.pid == pid)
    }
}

/// Runs scheduling simulations.
///
/// Holds only immutable configuration, so one instance can serve
/// concurrent callers; every call builds its own process records.
///
/// # Example
///
/// ```
/// use u_procsched::{Algorithm, ProcessSpec, SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     Algorithm::Fcfs,
///     vec![
///         ProcessSpec::new("A", 0, 5),
///         ProcessSpec::new("B", 1, 3),
///         ProcessSpec::new("C", 2, 2),
///     ],
/// );
///
/// let result = Simulator::default().simulate(&request).unwrap();
/// assert_eq!(result.timeline.makespan(), 10);
/// assert!((result.avg_waiting_time - 10.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one simulation.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidQuantum`] for Round-Robin with quantum < 1
    /// - [`SimulationError::EmptyProcessSet`] when no processes are given
    /// - [`SimulationError::InvalidProcessData`] for missing or out-of-range fields
    /// - [`SimulationError::Internal`] when the produced schedule fails the audit
    pub fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        let algorithm = request.algorithm;
        let quantum = self.resolve_quantum(algorithm, request.quantum).map_err(|e| {
            warn!(%algorithm, error = %e, "rejected quantum");
            e
        })?;

        let processes = build_processes(&request.processes).map_err(|errors| {
            warn!(%algorithm, errors = errors.len(), "rejected process data");
            SimulationError::from_validation(&errors)
        })?;
        let expected: Vec<Pid> = processes.iter().map(|p| p.pid.clone()).collect();

        debug!(
            %algorithm,
            processes = processes.len(),
            quantum = quantum.get(),
            preemptive = algorithm.is_preemptive(),
            "starting simulation"
        );

        let Execution {
            timeline,
            completed,
        } = algorithm.run(processes, quantum);

        if self.config.audit {
            let preemptive = algorithm.is_preemptive();
            audit_schedule(&expected, &timeline, &completed, preemptive).map_err(|errors| {
                let message = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                error!(%algorithm, %message, "schedule audit failed");
                SimulationError::Internal(message)
            })?;
        }

        let outcomes = completed
            .iter()
            .map(ProcessOutcome::from_process)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SimulationError::internal("process returned without completing"))?;
        if outcomes.len() != expected.len() {
            return Err(SimulationError::internal(format!(
                "{} of {} processes completed",
                outcomes.len(),
                expected.len()
            )));
        }

        let timeline = if self.config.merge_slices {
            timeline.merged()
        } else {
            timeline
        };
        let kpi = ScheduleKpi::calculate(&timeline, &outcomes);

        info!(
            %algorithm,
            processes = outcomes.len(),
            makespan = kpi.makespan,
            avg_waiting = kpi.avg_waiting_time,
            avg_turnaround = kpi.avg_turnaround_time,
            "simulation complete"
        );

        Ok(SimulationResult {
            algorithm,
            quantum: algorithm.uses_quantum().then_some(quantum),
            timeline,
            processes: outcomes,
            avg_waiting_time: kpi.avg_waiting_time,
            avg_turnaround_time: kpi.avg_turnaround_time,
            kpi,
        })
    }

    /// Parses `name` and runs one simulation.
    ///
    /// # Errors
    /// [`SimulationError::InvalidAlgorithm`] for an unknown name, otherwise
    /// as [`simulate`](Self::simulate).
    pub fn simulate_named(
        &self,
        name: &str,
        quantum: Option<i64>,
        processes: &[ProcessSpec],
    ) -> Result<SimulationResult, SimulationError> {
        let algorithm: Algorithm = name.parse().map_err(|e| {
            warn!(name, "rejected algorithm name");
            e
        })?;
        self.simulate(&SimulationRequest {
            algorithm,
            quantum,
            processes: processes.to_vec(),
        })
    }

    /// Quantum for this run. Only Round-Robin validates it.
    fn resolve_quantum(
        &self,
        algorithm: Algorithm,
        requested: Option<i64>,
    ) -> Result<Quantum, SimulationError> {
        if !algorithm.uses_quantum() {
            return Ok(Quantum::default());
        }
        Quantum::new(requested.unwrap_or(self.config.default_quantum))
    }
}
