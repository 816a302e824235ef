// src/lib.rs

//! `qtrio` - three canonical quantum computing demonstrations
//!
//! This library bundles textbook transcriptions of quantum
//! teleportation, Grover's search, and a black-hole information
//! scrambling toy model on top of a small dense statevector simulator.
//! Circuits stay at three qubits or fewer; every routine is a pure
//! function from parameters to measurement statistics.

pub mod circuits;
pub mod core;
pub mod demos;
pub mod linalg;
pub mod operations;
pub mod simulation;

// Re-export the most common types for easier top-level use
pub use circuits::{Circuit, CircuitBuilder, random_circuit};
pub use self::core::{ClbitId, QtrioError, QubitId, StateVector};
pub use demos::{
    black_hole_toy_model, build_teleportation_circuit, grovers_algorithm, quantum_teleportation,
};
pub use operations::{Gate, Operation};
pub use simulation::{Counts, Simulator};

// Example 1: Grover's search on two qubits.
// For n = 2 a single Grover iteration boosts the marked state to
// certainty, so every shot lands on the marked string.
/// ```
/// use qtrio::grovers_algorithm;
///
/// let (counts, circuit) = grovers_algorithm(2, "10", 256, None, true).unwrap();
/// assert_eq!(counts.get("10"), 256);
/// println!("{}", circuit.unwrap());
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: teleportation of a superposition state.
// Alice's two measurement bits are uniformly distributed; the
// teleported state itself ends on Bob's qubit q2.
/// ```
/// use num_complex::Complex64;
/// use qtrio::quantum_teleportation;
///
/// let alpha = Complex64::new(0.6, 0.0);
/// let beta = Complex64::new(0.8, 0.0);
/// let (counts, _) = quantum_teleportation(alpha, beta, 128, false).unwrap();
/// assert_eq!(counts.total(), 128);
/// assert!(counts.iter().all(|(outcome, _)| outcome.len() == 2));
/// ```
#[doc(hidden)]
const _: () = ();
