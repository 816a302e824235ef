// src/demos/grover.rs

//! Grover's search for a single marked item over `n` qubits.
//!
//! The oracle marks a basis state with a phase flip by conjugating a
//! multi-controlled X with Hadamards and bit flips; the diffusion
//! operator is the standard inversion about the mean. A caller may
//! substitute a custom phase oracle circuit, bypassing the bit-string
//! construction entirely.

use crate::circuits::Circuit;
use crate::core::{ClbitId, QubitId, QtrioError};
use crate::operations::{Gate, Operation};
use crate::simulation::{Counts, Simulator};
use std::f64::consts::PI;

/// Number of Grover iterations for `n` qubits:
/// `max(1, floor((π/4)·√N))` with `N = 2^n`. Fixed formula, not
/// adaptive.
pub fn grover_iterations(n: usize) -> usize {
    let optimal = (PI / 4.0) * 2f64.powf(n as f64 / 2.0);
    (optimal.floor() as usize).max(1)
}

/// Builds the phase oracle marking `marked` over `n` qubits.
///
/// Qubits whose marked bit is 0 are conjugated with X so the marked
/// state maps onto `|1...1>`, where an H-conjugated multi-controlled X
/// applies the phase flip; the X flips are then undone. The result is
/// self-inverse. Fails with `InvalidParameter` unless `marked` is an
/// `n`-character string of 0s and 1s.
pub fn mark_oracle(n: usize, marked: &str) -> Result<Circuit, QtrioError> {
    if marked.len() != n || marked.chars().any(|ch| ch != '0' && ch != '1') {
        return Err(QtrioError::parameter(format!(
            "marked must be an {n}-bit string of 0/1, got {marked:?}"
        )));
    }

    let mut oracle = Circuit::new(n, 0).with_name("oracle");
    let flips: Vec<QubitId> = marked
        .chars()
        .enumerate()
        .filter(|(_, bit)| *bit == '0')
        .map(|(i, _)| QubitId(i))
        .collect();

    for q in &flips {
        oracle.add_operation(Operation::Gate { target: *q, gate: Gate::X });
    }
    oracle.add_operation(Operation::Gate { target: QubitId(n - 1), gate: Gate::H });
    oracle.add_operation(Operation::MultiControlled {
        controls: (0..n - 1).map(QubitId).collect(),
        target: QubitId(n - 1),
        gate: Gate::X,
    });
    oracle.add_operation(Operation::Gate { target: QubitId(n - 1), gate: Gate::H });
    for q in &flips {
        oracle.add_operation(Operation::Gate { target: *q, gate: Gate::X });
    }
    Ok(oracle)
}

/// Builds the diffusion (inversion-about-the-mean) operator over `n`
/// qubits: H on all, X on all, H-conjugated multi-controlled X on the
/// last qubit, then undo.
pub fn diffusion_operator(n: usize) -> Circuit {
    let mut diffusion = Circuit::new(n, 0).with_name("diffusion");
    for q in 0..n {
        diffusion.add_operation(Operation::Gate { target: QubitId(q), gate: Gate::H });
    }
    for q in 0..n {
        diffusion.add_operation(Operation::Gate { target: QubitId(q), gate: Gate::X });
    }
    diffusion.add_operation(Operation::Gate { target: QubitId(n - 1), gate: Gate::H });
    diffusion.add_operation(Operation::MultiControlled {
        controls: (0..n - 1).map(QubitId).collect(),
        target: QubitId(n - 1),
        gate: Gate::X,
    });
    diffusion.add_operation(Operation::Gate { target: QubitId(n - 1), gate: Gate::H });
    for q in 0..n {
        diffusion.add_operation(Operation::Gate { target: QubitId(q), gate: Gate::X });
    }
    for q in 0..n {
        diffusion.add_operation(Operation::Gate { target: QubitId(q), gate: Gate::H });
    }
    diffusion
}

/// Runs Grover's algorithm on `n` qubits to find a marked state.
///
/// `marked` is left-padded with zeros to `n` bits, so `"1"` means the
/// all-but-last-zero state for any `n`. When `custom_oracle` is given
/// it is used instead of the bit-string construction; it must act on
/// exactly `n` qubits. Counts keys read in qubit order, so the
/// dominant outcome equals the (padded) marked string.
///
/// Fails with `InvalidParameter` when `n < 1`, when the marked string
/// is malformed, or when the custom oracle's width does not match.
pub fn grovers_algorithm(
    n: usize,
    marked: &str,
    shots: u64,
    custom_oracle: Option<Circuit>,
    return_circuit: bool,
) -> Result<(Counts, Option<Circuit>), QtrioError> {
    if n < 1 {
        return Err(QtrioError::parameter("n must be >= 1"));
    }
    // Checked before any circuit is built: the iteration formula and
    // the composition loop would otherwise run far past any practical
    // bound before the engine rejects the register size.
    if 1usize.checked_shl(n as u32).is_none() {
        return Err(QtrioError::parameter(format!(
            "n = {n} qubits overflow the state vector dimension"
        )));
    }

    let oracle = match custom_oracle {
        Some(oracle) => {
            if oracle.num_qubits() != n {
                return Err(QtrioError::parameter(format!(
                    "custom oracle acts on {} qubits, expected {n}",
                    oracle.num_qubits()
                )));
            }
            oracle
        }
        None => mark_oracle(n, &zero_fill(marked, n))?,
    };
    let diffusion = diffusion_operator(n);
    let qubits: Vec<QubitId> = (0..n).map(QubitId).collect();

    let mut circuit = Circuit::new(n, n).with_name("grover");
    for q in &qubits {
        circuit.add_operation(Operation::Gate { target: *q, gate: Gate::H });
    }
    for _ in 0..grover_iterations(n) {
        circuit.compose(&oracle, &qubits)?;
        circuit.compose(&diffusion, &qubits)?;
    }
    for q in 0..n {
        circuit.add_operation(Operation::Measure { target: QubitId(q), bit: ClbitId(q) });
    }

    let counts = Simulator::new().run(&circuit, shots)?;
    Ok((counts, return_circuit.then_some(circuit)))
}

/// Left-pads a bit-string with zeros to `width`; longer strings are
/// returned unchanged and rejected by the oracle's strict check.
fn zero_fill(s: &str, width: usize) -> String {
    if s.len() >= width {
        s.to_string()
    } else {
        let mut padded = "0".repeat(width - s.len());
        padded.push_str(s);
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_count_follows_the_quarter_pi_formula() {
        assert_eq!(grover_iterations(1), 1); // floor(1.11) = 1
        assert_eq!(grover_iterations(2), 1); // floor(1.57) = 1
        assert_eq!(grover_iterations(3), 2); // floor(2.22) = 2
        assert_eq!(grover_iterations(4), 3); // floor(3.14) = 3
    }

    #[test]
    fn oversized_register_is_rejected_up_front() {
        // Must fail immediately, before the iteration loop starts.
        let n = usize::BITS as usize;
        let err = grovers_algorithm(n, "", 1, None, false).unwrap_err();
        assert!(matches!(err, QtrioError::InvalidParameter { .. }));
    }

    #[test]
    fn oracle_rejects_malformed_strings() {
        assert!(mark_oracle(2, "1").is_err());
        assert!(mark_oracle(2, "102").is_err());
        assert!(mark_oracle(2, "ab").is_err());
        assert!(mark_oracle(2, "10").is_ok());
    }

    #[test]
    fn oracle_flips_only_the_marked_state_phase() {
        // <k|O|k> is -1 for the marked state and +1 elsewhere: apply
        // the oracle to each basis state and inspect the amplitude.
        use crate::operations::Operation;
        use crate::simulation::Simulator;

        let n = 2;
        let oracle = mark_oracle(n, "10").unwrap();
        for k in 0..(1usize << n) {
            let mut circuit = Circuit::new(n, 0);
            for q in 0..n {
                if k & (1 << (n - 1 - q)) != 0 {
                    circuit.add_operation(Operation::Gate { target: QubitId(q), gate: Gate::X });
                }
            }
            circuit.compose(&oracle, &[QubitId(0), QubitId(1)]).unwrap();
            let state = Simulator::new().statevector(&circuit).unwrap();
            // "10" marks q0=1, q1=0, which is basis index 2.
            let expected = if k == 2 { -1.0 } else { 1.0 };
            assert!(
                (state.vector()[k].re - expected).abs() < 1e-9,
                "basis state {k} has amplitude {}",
                state.vector()[k]
            );
        }
    }

    #[test]
    fn zero_fill_pads_on_the_left() {
        assert_eq!(zero_fill("1", 3), "001");
        assert_eq!(zero_fill("101", 3), "101");
        assert_eq!(zero_fill("1010", 3), "1010");
    }
}
