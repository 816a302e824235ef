// src/demos/mod.rs

//! The three demonstration routines: quantum teleportation, Grover's
//! search, and the black-hole scrambling toy model.
//!
//! Each routine is a stateless pure function from parameters to
//! measurement statistics; the routines share no state and do not
//! interact. A fresh simulator is used per call, unseeded, so repeated
//! calls resample.

pub mod black_hole;
pub mod grover;
pub mod teleportation;

pub use black_hole::{black_hole_toy_model, black_hole_toy_model_seeded};
pub use grover::{diffusion_operator, grover_iterations, grovers_algorithm, mark_oracle};
pub use teleportation::{build_teleportation_circuit, correction_ops, quantum_teleportation};
