// src/demos/teleportation.rs

//! Standard 3-qubit quantum teleportation.
//!
//! Qubit mapping:
//! - q0: Alice's input qubit, prepared in `alpha|0> + beta|1>`
//! - q1: Alice's half of the Bell pair
//! - q2: Bob's half of the Bell pair, which receives the state
//!
//! The classically conditioned corrections on Bob's qubit are derived
//! from [`correction_ops`], a pure mapping from Alice's two measured
//! bits to the correction operators, rather than being hard-wired into
//! the circuit construction.

use crate::circuits::Circuit;
use crate::core::{ClbitId, QubitId, QtrioError};
use crate::operations::{Gate, Operation};
use crate::simulation::{Counts, Simulator};
use num_complex::Complex64;

/// Correction operators Bob applies for Alice's measured bits
/// `(m0, m1)`: X when the Bell-pair bit `m1` is 1, Z when the
/// message bit `m0` is 1. Pure function; the circuit's conditioned
/// operations are generated from it.
pub fn correction_ops(m0: bool, m1: bool) -> Vec<Gate> {
    let mut gates = Vec::new();
    if m1 {
        gates.push(Gate::X);
    }
    if m0 {
        gates.push(Gate::Z);
    }
    gates
}

/// Builds the standard 3-qubit teleportation circuit for the state
/// `alpha|0> + beta|1>`, normalizing the amplitudes first.
///
/// The circuit has 3 qubits and 2 classical bits (c0 from q0, c1 from
/// q1). Fails with `InvalidParameter` when both amplitudes are zero,
/// since the normalization is undefined.
pub fn build_teleportation_circuit(
    alpha: Complex64,
    beta: Complex64,
) -> Result<Circuit, QtrioError> {
    let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
    if norm < 1e-12 {
        return Err(QtrioError::parameter("state amplitudes cannot both be zero"));
    }
    let alpha = alpha / norm;
    let beta = beta / norm;

    let (q0, q1, q2) = (QubitId(0), QubitId(1), QubitId(2));
    let (c0, c1) = (ClbitId(0), ClbitId(1));

    let mut circuit = Circuit::new(3, 2).with_name("teleportation");

    // Prepare the message state on q0.
    circuit.add_operation(Operation::Prepare { target: q0, alpha, beta });

    // Bell pair between Alice (q1) and Bob (q2).
    circuit.add_operation(Operation::Gate { target: q1, gate: Gate::H });
    circuit.add_operation(Operation::Controlled { control: q1, target: q2, gate: Gate::X });

    // Bell-basis measurement on (q0, q1).
    circuit.add_operation(Operation::Controlled { control: q0, target: q1, gate: Gate::X });
    circuit.add_operation(Operation::Gate { target: q0, gate: Gate::H });
    circuit.add_operation(Operation::Measure { target: q0, bit: c0 });
    circuit.add_operation(Operation::Measure { target: q1, bit: c1 });

    // Conditioned corrections on Bob's qubit, one classical bit each:
    // the gates conditioned on c1 are those the correction table emits
    // for m1 = 1 alone, and likewise for c0 / m0.
    for gate in correction_ops(false, true) {
        circuit.add_operation(Operation::Conditioned { bit: c1, target: q2, gate });
    }
    for gate in correction_ops(true, false) {
        circuit.add_operation(Operation::Conditioned { bit: c0, target: q2, gate });
    }

    Ok(circuit)
}

/// Runs quantum teleportation for the input state `alpha|0> + beta|1>`.
///
/// Returns the counts over Alice's two classical bits (uniform over the
/// four outcomes for any input) and, when `return_circuit` is set, the
/// constructed circuit. The teleported state ends on q2; see the
/// engine-level tests for the statevector verification.
pub fn quantum_teleportation(
    alpha: Complex64,
    beta: Complex64,
    shots: u64,
    return_circuit: bool,
) -> Result<(Counts, Option<Circuit>), QtrioError> {
    let circuit = build_teleportation_circuit(alpha, beta)?;
    let counts = Simulator::new().run(&circuit, shots)?;
    Ok((counts, return_circuit.then_some(circuit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_table_matches_the_protocol() {
        assert!(correction_ops(false, false).is_empty());
        assert_eq!(correction_ops(false, true), vec![Gate::X]);
        assert_eq!(correction_ops(true, false), vec![Gate::Z]);
        assert_eq!(correction_ops(true, true), vec![Gate::X, Gate::Z]);
    }

    #[test]
    fn circuit_has_three_qubits_and_two_clbits() {
        let circuit = build_teleportation_circuit(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        )
        .unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
    }

    #[test]
    fn unnormalized_input_is_accepted() {
        // (3, 4) normalizes to (0.6, 0.8).
        let circuit = build_teleportation_circuit(
            Complex64::new(3.0, 0.0),
            Complex64::new(4.0, 0.0),
        )
        .unwrap();
        match circuit.operations().first() {
            Some(Operation::Prepare { alpha, beta, .. }) => {
                assert!((alpha.re - 0.6).abs() < 1e-12);
                assert!((beta.re - 0.8).abs() < 1e-12);
            }
            other => panic!("expected preparation first, got {other:?}"),
        }
    }

    #[test]
    fn zero_amplitudes_are_rejected() {
        let err = build_teleportation_circuit(
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, QtrioError::InvalidParameter { .. }));
    }
}
