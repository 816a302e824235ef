// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod state;

pub use error::QtrioError;
pub use qubit::{ClbitId, QubitId};
pub use state::StateVector;
