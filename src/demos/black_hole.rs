// src/demos/black_hole.rs

//! Toy model of black-hole information scrambling.
//!
//! Qubits: 0 - infalling matter, 1 - black hole, 2 - radiation. The
//! circuit prepares the matter qubit, entangles it with the black-hole
//! qubit, creates a Hawking pair with the radiation qubit, and then
//! scrambles the black-hole subsystem with a random unitary. The
//! entanglement entropy of the radiation qubit quantifies how much
//! information the scrambled subsystem still shares with it.

use crate::circuits::{random_circuit, Circuit};
use crate::core::{QubitId, QtrioError};
use crate::linalg::{partial_trace_single, von_neumann_entropy};
use crate::operations::{Gate, Operation};
use crate::simulation::Simulator;

/// Depth of the scrambling circuit applied to the black-hole subsystem.
const SCRAMBLE_DEPTH: usize = 3;

/// Builds and simulates the black-hole toy model over `num_qubits`
/// qubits (3 is the canonical size; extra qubits idle as spectators).
///
/// The scrambling unitary is freshly random on every call, so results
/// are not reproducible between runs; see
/// [`black_hole_toy_model_seeded`] for a deterministic variant.
///
/// Returns the constructed circuit and the von Neumann entropy of the
/// radiation qubit, bounded by 1 for a single-qubit subsystem. Fewer
/// than 3 qubits surfaces as the engine's own range error.
pub fn black_hole_toy_model(num_qubits: usize) -> Result<(Circuit, f64), QtrioError> {
    run_toy_model(num_qubits, random_circuit(2, SCRAMBLE_DEPTH, &mut rand::rng()))
}

/// Deterministic variant of [`black_hole_toy_model`]: the scrambling
/// circuit and the simulation are driven by the given seed.
pub fn black_hole_toy_model_seeded(num_qubits: usize, seed: u64) -> Result<(Circuit, f64), QtrioError> {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    run_toy_model(num_qubits, random_circuit(2, SCRAMBLE_DEPTH, &mut rng))
}

fn run_toy_model(num_qubits: usize, scramble: Circuit) -> Result<(Circuit, f64), QtrioError> {
    let (matter, hole, radiation) = (QubitId(0), QubitId(1), QubitId(2));

    let mut circuit = Circuit::new(num_qubits, 0).with_name("black-hole");

    // Stage 1: prepare infalling matter as |1>.
    circuit.add_operation(Operation::Gate { target: matter, gate: Gate::X });
    circuit.add_operation(Operation::Barrier);

    // Stage 2: entangle the matter with the black hole.
    circuit.add_operation(Operation::Gate { target: hole, gate: Gate::H });
    circuit.add_operation(Operation::Controlled { control: matter, target: hole, gate: Gate::X });
    circuit.add_operation(Operation::Barrier);

    // Stage 3: evaporation creates a Hawking pair with the radiation qubit.
    circuit.add_operation(Operation::Controlled { control: hole, target: radiation, gate: Gate::X });
    circuit.add_operation(Operation::Barrier);

    // Stage 4: scramble the black-hole subsystem (hole + radiation).
    circuit.compose(&scramble, &[hole, radiation])?;
    circuit.add_operation(Operation::Barrier);

    let state = Simulator::new().statevector(&circuit)?;
    let rho = partial_trace_single(&state, radiation)?;
    let entropy = von_neumann_entropy(&rho);

    Ok((circuit, entropy))
}
