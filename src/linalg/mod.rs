// src/linalg/mod.rs

//! Small linear-algebra helpers for analyzing simulation results:
//! single-qubit partial trace, von Neumann entropy, and normalization
//! checks.

use crate::core::{QubitId, QtrioError, StateVector};
use num_complex::Complex64;
use num_traits::Zero;

const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
const EIGENVALUE_TOLERANCE: f64 = 1e-12;

/// Reduced density matrix of a single qubit, obtained by tracing a pure
/// state over every other qubit.
///
/// Row/column indices follow the `{|0>, |1>}` basis of the kept qubit.
pub fn partial_trace_single(
    state: &StateVector,
    qubit: QubitId,
) -> Result<[[Complex64; 2]; 2], QtrioError> {
    let n = state.num_qubits();
    if qubit.0 >= n {
        return Err(QtrioError::operation(format!(
            "qubit {qubit} out of range for a {n}-qubit state"
        )));
    }
    let mask = 1usize << (n - 1 - qubit.0);
    let amplitudes = state.vector();

    let mut rho = [[Complex64::zero(); 2]; 2];
    for k0 in 0..state.dim() {
        if k0 & mask != 0 {
            continue;
        }
        let k1 = k0 | mask;
        let a0 = amplitudes[k0];
        let a1 = amplitudes[k1];
        rho[0][0] += a0 * a0.conj();
        rho[0][1] += a0 * a1.conj();
        rho[1][0] += a1 * a0.conj();
        rho[1][1] += a1 * a1.conj();
    }
    Ok(rho)
}

/// Von Neumann entropy `-Tr(ρ log2 ρ)` of a 2x2 density matrix.
///
/// Uses the closed-form eigenvalues of a 2x2 Hermitian matrix; each
/// eigenvalue is clamped into `[0, 1]` before taking the logarithm so
/// rounding error cannot push the entropy above one.
pub fn von_neumann_entropy(rho: &[[Complex64; 2]; 2]) -> f64 {
    let half_trace = (rho[0][0].re + rho[1][1].re) / 2.0;
    let half_gap = (rho[0][0].re - rho[1][1].re) / 2.0;
    let disc = (half_gap * half_gap + rho[0][1].norm_sqr()).sqrt();
    let eigenvalues = [half_trace + disc, half_trace - disc];

    eigenvalues
        .iter()
        .map(|l| l.clamp(0.0, 1.0))
        .filter(|l| *l > EIGENVALUE_TOLERANCE)
        .map(|l| -l * l.log2())
        .sum()
}

/// Checks that the state vector is normalized within `tolerance`
/// (defaults to `1e-9`).
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QtrioError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(QtrioError::SimulationError {
            message: format!(
                "state vector normalization failed: sum |c_i|^2 = {norm_sqr} (deviation > {effective_tolerance})"
            ),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::Circuit;
    use crate::operations::{Gate, Operation};
    use crate::simulation::Simulator;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn q(i: usize) -> QubitId {
        QubitId(i)
    }

    fn bell_state() -> StateVector {
        let mut circuit = Circuit::new(2, 0);
        circuit.add_operation(Operation::Gate { target: q(0), gate: Gate::H });
        circuit.add_operation(Operation::Controlled { control: q(0), target: q(1), gate: Gate::X });
        Simulator::new().statevector(&circuit).unwrap()
    }

    #[test]
    fn bell_pair_subsystem_is_maximally_mixed() {
        let state = bell_state();
        let rho = partial_trace_single(&state, q(1)).unwrap();
        assert!((rho[0][0].re - 0.5).abs() < 1e-9);
        assert!((rho[1][1].re - 0.5).abs() < 1e-9);
        assert!(rho[0][1].norm() < 1e-9);
        assert!((von_neumann_entropy(&rho) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn product_state_has_zero_entropy() {
        let mut circuit = Circuit::new(2, 0);
        circuit.add_operation(Operation::Gate { target: q(0), gate: Gate::H });
        let state = Simulator::new().statevector(&circuit).unwrap();
        let rho = partial_trace_single(&state, q(1)).unwrap();
        assert!(von_neumann_entropy(&rho) < 1e-9);
        // And the traced-out |+> qubit is pure as well.
        let rho_plus = partial_trace_single(&state, q(0)).unwrap();
        assert!((rho_plus[0][1].re - 0.5).abs() < 1e-9);
        assert!(von_neumann_entropy(&rho_plus) < 1e-9);
    }

    #[test]
    fn partial_trace_preserves_unit_trace() {
        let state = bell_state();
        let rho = partial_trace_single(&state, q(0)).unwrap();
        assert!((rho[0][0].re + rho[1][1].re - 1.0).abs() < 1e-9);
    }

    #[test]
    fn partial_trace_rejects_bad_qubit() {
        let state = bell_state();
        assert!(partial_trace_single(&state, q(4)).is_err());
    }

    #[test]
    fn normalization_check_accepts_unit_states() {
        let state = bell_state();
        check_normalization(&state, None).unwrap();
        assert!((state.vector()[0].re - FRAC_1_SQRT_2).abs() < 1e-9);
    }
}
