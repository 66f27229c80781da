//! Simulation error taxonomy.
//!
//! Every failure is either a validation error (the caller sent bad input;
//! maps to a 4xx-class status) or an internal error (the simulation itself
//! misbehaved; maps to 5xx). No partial results accompany either.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors returned by the simulator and the request boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    /// Algorithm name not recognized.
    #[error(
        "Invalid algorithm '{0}'. Valid: FCFS, SJF, SJF-Preemptive, Priority, Priority-Preemptive, RR"
    )]
    InvalidAlgorithm(String),

    /// Round-robin quantum below 1.
    #[error("Quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// One or more process descriptors are missing fields or out of range.
    #[error("Invalid process data: {0}")]
    InvalidProcessData(String),

    /// No processes to schedule.
    #[error("Process list is empty")]
    EmptyProcessSet,

    /// Request body could not be parsed or lacks required fields.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The simulation produced an inconsistent schedule.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SimulationError {
    /// Create an internal error
    #[inline]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a malformed request error
    #[inline]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRequest(msg.into())
    }

    /// Collapses a list of input validation errors into one error.
    ///
    /// An empty process set wins over per-process issues; the remaining
    /// messages are joined so every offending process is named.
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        if errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet)
        {
            return Self::EmptyProcessSet;
        }
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::InvalidProcessData(message)
    }

    /// Whether the caller can fix this by changing the input.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }

    /// HTTP-equivalent status: 400 for validation failures, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else {
            500
        }
    }
}
