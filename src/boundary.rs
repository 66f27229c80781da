//! JSON request boundary.
//!
//! Turns a raw request body into a [`SimulationRequest`], runs it, and
//! encodes either the result or the error as a JSON body with an
//! HTTP-equivalent status. An HTTP host only has to forward the body and
//! copy `status` onto its response.
//!
//! # Wire Format
//!
//! Request:
//! ```json
//! { "algorithm": "RR", "quantum": 2,
//!   "processes": [{ "pid": "A", "arrival": 0, "burst": 5, "priority": 1 }] }
//! ```
//!
//! Success (200):
//! ```json
//! { "gantt_chart": [["A", 0, 2], ...], "avg_waiting_time": 3.5,
//!   "avg_turnaround_time": 7.5,
//!   "processes": [{ "pid": "A", "waiting_time": 4, "turnaround_time": 9 }] }
//! ```
//!
//! Failure (400 for bad input, 500 for internal failures):
//! ```json
//! { "error": "Quantum must be positive, got 0" }
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SimulationError;
use crate::models::{Pid, ProcessSpec, Timeline};
use crate::scheduler::Algorithm;
use crate::simulation::{SimulationRequest, SimulationResult, Simulator};

/// Request body before required-field checks.
#[derive(Debug, Deserialize)]
struct RawRequest {
    algorithm: Option<String>,
    quantum: Option<i64>,
    processes: Option<Vec<ProcessSpec>>,
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// `[pid, start, end]` triples in execution order.
    pub gantt_chart: Timeline,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Per-process metrics, in completion order.
    pub processes: Vec<ProcessSummary>,
}

/// Per-process entry of a [`ScheduleResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Process identifier.
    pub pid: Pid,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
}

/// Failure response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error.
    pub error: String,
}

/// Encoded response with its HTTP-equivalent status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryResponse {
    /// 200, 400, or 500.
    pub status: u16,
    /// JSON body.
    pub body: String,
}

impl BoundaryResponse {
    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

impl From<&SimulationResult> for ScheduleResponse {
    fn from(result: &SimulationResult) -> Self {
        Self {
            gantt_chart: result.timeline.clone(),
            avg_waiting_time: result.avg_waiting_time,
            avg_turnaround_time: result.avg_turnaround_time,
            processes: result
                .processes
                .iter()
                .map(|o| ProcessSummary {
                    pid: o.pid.clone(),
                    waiting_time: o.waiting_time,
                    turnaround_time: o.turnaround_time,
                })
                .collect(),
        }
    }
}

/// Parses a request body.
///
/// # Errors
/// - [`SimulationError::MalformedRequest`] for invalid JSON or a missing
///   `algorithm` / `processes` field
/// - [`SimulationError::InvalidAlgorithm`] for an unknown name
pub fn parse_request(body: &str) -> Result<SimulationRequest, SimulationError> {
    let raw: RawRequest =
        serde_json::from_str(body).map_err(|e| SimulationError::malformed(e.to_string()))?;

    let (Some(name), Some(processes)) = (raw.algorithm, raw.processes) else {
        return Err(SimulationError::malformed("Missing required fields"));
    };
    let algorithm: Algorithm = name.parse()?;

    Ok(SimulationRequest {
        algorithm,
        quantum: raw.quantum,
        processes,
    })
}

/// Handles one JSON request end to end.
///
/// Never panics; every failure becomes an error body.
pub fn handle_json(simulator: &Simulator, body: &str) -> BoundaryResponse {
    match respond(simulator, body) {
        Ok(body) => BoundaryResponse { status: 200, body },
        Err(e) => {
            warn!(status = e.status_code(), error = %e, "request failed");
            error_response(&e)
        }
    }
}

fn respond(simulator: &Simulator, body: &str) -> Result<String, SimulationError> {
    let request = parse_request(body)?;
    let result = simulator.simulate(&request)?;
    serde_json::to_string(&ScheduleResponse::from(&result))
        .map_err(|e| SimulationError::internal(format!("failed to encode response: {e}")))
}

/// Encodes an error as a `{ "error": ... }` body.
pub fn error_response(error: &SimulationError) -> BoundaryResponse {
    BoundaryResponse {
        status: error.status_code(),
        body: serde_json::json!({ "error": error.to_string() }).to_string(),
    }
}
