// src/operations/mod.rs

//! Defines the operations a circuit is built from: gate applications,
//! controlled variants, state preparation, measurement, and classically
//! conditioned corrections.

mod gate;

pub use gate::Gate;

use crate::core::{ClbitId, QubitId, QtrioError};
use num_complex::Complex64;

/// A single step in a circuit.
///
/// Operations act on qubit and classical-bit indices of the circuit
/// that owns them; validity against the register sizes is checked by
/// the simulation engine when the circuit runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Apply a single-qubit gate.
    Gate {
        /// Target qubit.
        target: QubitId,
        /// Gate to apply.
        gate: Gate,
    },

    /// Apply a gate to `target` conditioned on `control` being `|1>`.
    ///
    /// Analogy: CNOT is `Controlled { gate: Gate::X, .. }`, CZ is
    /// `Controlled { gate: Gate::Z, .. }`.
    Controlled {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
        /// Gate applied to the target when the control is set.
        gate: Gate,
    },

    /// Apply a gate to `target` conditioned on every qubit in
    /// `controls` being `|1>`. An empty control list degenerates to a
    /// plain gate application, which is what Grover's oracle relies on
    /// for the single-qubit search space.
    MultiControlled {
        /// Control qubits; must not contain the target.
        controls: Vec<QubitId>,
        /// Target qubit.
        target: QubitId,
        /// Gate applied to the target when all controls are set.
        gate: Gate,
    },

    /// Prepare `target` in the state `alpha|0> + beta|1>`.
    ///
    /// The amplitudes must be normalized. Implemented as the unitary
    /// completion of the amplitude pair, so the target is assumed to
    /// start in `|0>` (the engine's initial state guarantees this when
    /// preparation is the first operation touching the qubit).
    Prepare {
        /// Target qubit.
        target: QubitId,
        /// Amplitude of `|0>`.
        alpha: Complex64,
        /// Amplitude of `|1>`.
        beta: Complex64,
    },

    /// Measure `target` in the computational basis and store the
    /// outcome in classical bit `bit`. Collapses the state.
    Measure {
        /// Qubit to measure.
        target: QubitId,
        /// Destination classical bit.
        bit: ClbitId,
    },

    /// Apply a gate to `target` only if classical bit `bit` holds 1.
    /// Used for the teleportation corrections.
    Conditioned {
        /// Classical bit gating the application.
        bit: ClbitId,
        /// Target qubit.
        target: QubitId,
        /// Gate applied when the bit is set.
        gate: Gate,
    },

    /// Visual separator between circuit stages. No effect on the state.
    Barrier,
}

impl Operation {
    /// All qubit indices this operation touches, in no particular order.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Gate { target, .. }
            | Operation::Prepare { target, .. }
            | Operation::Measure { target, .. }
            | Operation::Conditioned { target, .. } => vec![*target],
            Operation::Controlled { control, target, .. } => vec![*control, *target],
            Operation::MultiControlled { controls, target, .. } => {
                let mut qs = controls.clone();
                qs.push(*target);
                qs
            }
            Operation::Barrier => Vec::new(),
        }
    }

    /// Rewrites the operation's qubit indices through `map`, where the
    /// fragment's qubit `i` becomes `map[i]` in the host circuit. Used
    /// by [`Circuit::compose`](crate::circuits::Circuit::compose).
    pub(crate) fn remapped(&self, map: &[QubitId]) -> Result<Operation, QtrioError> {
        let lookup = |q: QubitId| -> Result<QubitId, QtrioError> {
            map.get(q.0).copied().ok_or_else(|| {
                QtrioError::operation(format!(
                    "fragment qubit {q} has no mapping (fragment wider than the qubit list)"
                ))
            })
        };
        Ok(match self {
            Operation::Gate { target, gate } => Operation::Gate { target: lookup(*target)?, gate: *gate },
            Operation::Controlled { control, target, gate } => Operation::Controlled {
                control: lookup(*control)?,
                target: lookup(*target)?,
                gate: *gate,
            },
            Operation::MultiControlled { controls, target, gate } => Operation::MultiControlled {
                controls: controls.iter().map(|q| lookup(*q)).collect::<Result<_, _>>()?,
                target: lookup(*target)?,
                gate: *gate,
            },
            Operation::Prepare { target, alpha, beta } => Operation::Prepare {
                target: lookup(*target)?,
                alpha: *alpha,
                beta: *beta,
            },
            Operation::Measure { target, bit } => Operation::Measure { target: lookup(*target)?, bit: *bit },
            Operation::Conditioned { bit, target, gate } => Operation::Conditioned {
                bit: *bit,
                target: lookup(*target)?,
                gate: *gate,
            },
            Operation::Barrier => Operation::Barrier,
        })
    }
}
