// src/core/state.rs

use num_complex::Complex64;
use num_traits::Zero;
use std::fmt;

/// A pure quantum state over `n` qubits, stored as a dense vector of
/// `2^n` complex amplitudes.
///
/// Basis ordering follows the big-endian convention: qubit `i` occupies
/// bit position `n - 1 - i` of the basis index, so `|q0 q1 .. q(n-1)>`
/// reads left to right. Index 0 is `|0...0>`.
#[derive(Debug, Clone, PartialEq)] // No Eq for floating-point amplitudes
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl StateVector {
    /// Creates the all-zeros state `|0...0>` over `num_qubits` qubits.
    pub(crate) fn zero_state(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::zero(); dim];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self { amplitudes, num_qubits }
    }

    /// Wraps an explicit amplitude vector. The length must be `2^num_qubits`;
    /// callers inside the crate are responsible for that invariant.
    #[cfg(test)]
    pub(crate) fn from_amplitudes(amplitudes: Vec<Complex64>, num_qubits: usize) -> Self {
        debug_assert_eq!(amplitudes.len(), 1usize << num_qubits);
        Self { amplitudes, num_qubits }
    }

    /// Read-only view of the amplitude vector.
    pub fn vector(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable access for the simulation engine.
    pub(crate) fn vector_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Replaces the amplitude vector in place. Length must be unchanged.
    pub(crate) fn replace(&mut self, amplitudes: Vec<Complex64>) {
        debug_assert_eq!(amplitudes.len(), self.amplitudes.len());
        self.amplitudes = amplitudes;
    }

    /// Dimension of the state vector (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits this state describes.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Born probability of observing basis state `k`.
    pub fn probability(&self, k: usize) -> f64 {
        self.amplitudes[k].norm_sqr()
    }

    /// Sum of squared amplitude magnitudes. 1.0 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
