// src/circuits/random.rs

//! Random circuit generation, used by the black-hole toy model as a
//! stand-in for a scrambling unitary.

use crate::circuits::Circuit;
use crate::core::QubitId;
use crate::operations::{Gate, Operation};
use rand::{Rng, RngExt};
use std::f64::consts::TAU;

/// Builds a structurally random unitary circuit of the given depth.
///
/// Each layer applies one randomly chosen single-qubit gate per qubit
/// (drawn from a small fixed set, with rotation angles uniform in
/// `[0, 2π)`) followed by one random two-qubit entangler (CX or CZ on a
/// random ordered pair) when the register has at least two qubits. The
/// result contains no measurements, so it stays safe to compose into a
/// statevector run.
pub fn random_circuit<R: Rng + ?Sized>(num_qubits: usize, depth: usize, rng: &mut R) -> Circuit {
    let mut circuit = Circuit::new(num_qubits, 0).with_name("random");
    for _ in 0..depth {
        for q in 0..num_qubits {
            circuit.add_operation(Operation::Gate {
                target: QubitId(q),
                gate: random_single_qubit_gate(rng),
            });
        }
        if num_qubits >= 2 {
            let control = rng.random_range(0..num_qubits);
            let mut target = rng.random_range(0..num_qubits - 1);
            if target >= control {
                target += 1;
            }
            let gate = if rng.random_bool(0.5) { Gate::X } else { Gate::Z };
            circuit.add_operation(Operation::Controlled {
                control: QubitId(control),
                target: QubitId(target),
                gate,
            });
        }
    }
    circuit
}

fn random_single_qubit_gate<R: Rng + ?Sized>(rng: &mut R) -> Gate {
    match rng.random_range(0..8) {
        0 => Gate::H,
        1 => Gate::X,
        2 => Gate::S,
        3 => Gate::T,
        4 => Gate::Sx,
        5 => Gate::Rx(rng.random::<f64>() * TAU),
        6 => Gate::Ry(rng.random::<f64>() * TAU),
        _ => Gate::Rz(rng.random::<f64>() * TAU),
    }
}
