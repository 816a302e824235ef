// src/simulation/engine.rs

use crate::core::{ClbitId, QubitId, QtrioError, StateVector};
use crate::operations::Operation;
use num_complex::Complex64;
use num_traits::Zero;
use rand::{Rng, RngExt};

/// Evolves a dense state vector through a sequence of operations and
/// tracks the classical register. One engine instance corresponds to a
/// single shot of a circuit. (Internal visibility)
pub(crate) struct SimulationEngine {
    /// Global state over all qubits. Qubit `i` maps to bit position
    /// `num_qubits - 1 - i` of the basis index.
    state: StateVector,
    /// Classical register; `false` until written by a measurement.
    classical: Vec<bool>,
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine in `|0...0>` with a cleared classical
    /// register.
    pub(crate) fn init(num_qubits: usize, num_clbits: usize) -> Result<Self, QtrioError> {
        if num_qubits == 0 {
            return Err(QtrioError::operation(
                "cannot simulate a circuit with zero qubits",
            ));
        }
        1usize.checked_shl(num_qubits as u32).ok_or_else(|| QtrioError::SimulationError {
            message: format!("{num_qubits} qubits overflow the state vector dimension"),
        })?;
        Ok(Self {
            state: StateVector::zero_state(num_qubits),
            classical: vec![false; num_clbits],
            num_qubits,
        })
    }

    /// Applies one operation, sampling the RNG only for measurements.
    pub(crate) fn apply_operation<R: Rng + ?Sized>(
        &mut self,
        op: &Operation,
        rng: &mut R,
    ) -> Result<(), QtrioError> {
        match op {
            Operation::Gate { target, gate } => self.apply_gate(&[], *target, &gate.matrix()),
            Operation::Controlled { control, target, gate } => {
                self.apply_gate(&[*control], *target, &gate.matrix())
            }
            Operation::MultiControlled { controls, target, gate } => {
                self.apply_gate(controls, *target, &gate.matrix())
            }
            Operation::Prepare { target, alpha, beta } => self.prepare(*target, *alpha, *beta),
            Operation::Measure { target, bit } => self.measure(*target, *bit, rng),
            Operation::Conditioned { bit, target, gate } => {
                if self.read_bit(*bit)? {
                    self.apply_gate(&[], *target, &gate.matrix())
                } else {
                    Ok(())
                }
            }
            Operation::Barrier => Ok(()),
        }
    }

    /// Applies a 2x2 matrix to `target`, restricted to the subspace
    /// where every qubit in `controls` is `|1>`. An empty control slice
    /// is an unconditional application.
    ///
    /// Pairs of basis indices differing only in the target bit are
    /// transformed together; indices outside the control subspace pass
    /// through untouched.
    fn apply_gate(
        &mut self,
        controls: &[QubitId],
        target: QubitId,
        matrix: &[[Complex64; 2]; 2],
    ) -> Result<(), QtrioError> {
        let target_mask = self.bit_mask(target)?;
        let mut control_mask = 0usize;
        for control in controls {
            if *control == target {
                return Err(QtrioError::operation(format!(
                    "control and target coincide on {target}"
                )));
            }
            control_mask |= self.bit_mask(*control)?;
        }

        let dim = self.state.dim();
        let mut next = self.state.vector().to_vec();
        for k0 in 0..dim {
            if k0 & target_mask != 0 || k0 & control_mask != control_mask {
                continue;
            }
            let k1 = k0 | target_mask;
            let a0 = self.state.vector()[k0];
            let a1 = self.state.vector()[k1];
            next[k0] = matrix[0][0] * a0 + matrix[0][1] * a1;
            next[k1] = matrix[1][0] * a0 + matrix[1][1] * a1;
        }
        self.state.replace(next);
        Ok(())
    }

    /// Prepares `target` in `alpha|0> + beta|1>` by applying the
    /// unitary completion of the amplitude pair. Assumes the target is
    /// still in `|0>`.
    fn prepare(&mut self, target: QubitId, alpha: Complex64, beta: Complex64) -> Result<(), QtrioError> {
        let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
        if (norm_sqr - 1.0).abs() > 1e-6 {
            return Err(QtrioError::operation(format!(
                "preparation amplitudes are not normalized: |α|² + |β|² = {norm_sqr}"
            )));
        }
        let matrix = [[alpha, -beta.conj()], [beta, alpha.conj()]];
        self.apply_gate(&[], target, &matrix)
    }

    /// Measures `target` in the computational basis: samples the Born
    /// probability, collapses and renormalizes the state, and records
    /// the outcome in classical bit `bit`.
    fn measure<R: Rng + ?Sized>(
        &mut self,
        target: QubitId,
        bit: ClbitId,
        rng: &mut R,
    ) -> Result<(), QtrioError> {
        let target_mask = self.bit_mask(target)?;
        if bit.0 >= self.classical.len() {
            return Err(QtrioError::operation(format!(
                "classical bit {bit} out of range for a {}-bit register",
                self.classical.len()
            )));
        }

        let p_one: f64 = (0..self.state.dim())
            .filter(|k| k & target_mask != 0)
            .map(|k| self.state.probability(k))
            .sum();
        let outcome = rng.random::<f64>() < p_one;
        let branch_weight = if outcome { p_one } else { 1.0 - p_one };
        if branch_weight <= 1e-12 {
            return Err(QtrioError::SimulationError {
                message: format!("measurement of {target} selected a branch of vanishing weight"),
            });
        }

        let scale = 1.0 / branch_weight.sqrt();
        for (k, amp) in self.state.vector_mut().iter_mut().enumerate() {
            if (k & target_mask != 0) == outcome {
                *amp *= scale;
            } else {
                *amp = Complex64::zero();
            }
        }
        self.classical[bit.0] = outcome;
        Ok(())
    }

    fn read_bit(&self, bit: ClbitId) -> Result<bool, QtrioError> {
        self.classical.get(bit.0).copied().ok_or_else(|| {
            QtrioError::operation(format!(
                "classical bit {bit} out of range for a {}-bit register",
                self.classical.len()
            ))
        })
    }

    /// Mask for the basis-index bit of `target`, validating the index.
    fn bit_mask(&self, target: QubitId) -> Result<usize, QtrioError> {
        if target.0 >= self.num_qubits {
            return Err(QtrioError::operation(format!(
                "qubit {target} out of range for a {}-qubit register",
                self.num_qubits
            )));
        }
        Ok(1usize << (self.num_qubits - 1 - target.0))
    }

    /// The classical register rendered as a bit-string, bit 0 first.
    pub(crate) fn classical_bitstring(&self) -> String {
        self.classical.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    pub(crate) fn into_state(self) -> StateVector {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), QtrioError> {
        if state.dim() != self.state.dim() {
            return Err(QtrioError::SimulationError {
                message: format!(
                    "cannot set state: dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }
}
