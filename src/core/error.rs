// src/core/error.rs

//! Error handling logic

use thiserror::Error;

/// Error type covering every failure surfaced by this crate.
///
/// There are only two error families: caller mistakes
/// (`InvalidParameter`), reported before any circuit is constructed,
/// and failures raised while building or executing a circuit
/// (`InvalidOperation`, `SimulationError`). Every failure is fatal to
/// the current call; there are no retries or partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QtrioError {
    /// A caller-supplied parameter is malformed (bad bit-string, zero
    /// qubit count, degenerate amplitudes).
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// What was wrong with the parameter.
        message: String,
    },

    /// An operation is inconsistent with the circuit it is applied to,
    /// e.g. a gate referencing a qubit outside the register.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// What made the operation invalid.
        message: String,
    },

    /// The simulation itself failed (numerical breakdown, internal
    /// indexing error).
    #[error("simulation error: {message}")]
    SimulationError {
        /// What went wrong during simulation.
        message: String,
    },
}

impl QtrioError {
    /// Shorthand for an `InvalidParameter` error.
    pub(crate) fn parameter(message: impl Into<String>) -> Self {
        QtrioError::InvalidParameter { message: message.into() }
    }

    /// Shorthand for an `InvalidOperation` error.
    pub(crate) fn operation(message: impl Into<String>) -> Self {
        QtrioError::InvalidOperation { message: message.into() }
    }
}
