// src/operations/gate.rs

//! Standard single-qubit gates and their matrices.

use num_complex::Complex64;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// A standard single-qubit gate.
///
/// Every variant has a fixed 2x2 unitary matrix (up to the rotation
/// parameters), obtained with [`Gate::matrix`]. Controlled and
/// multi-controlled applications of these gates are expressed at the
/// [`Operation`](crate::operations::Operation) level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Identity.
    I,
    /// Pauli-X (bit flip).
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z (phase flip).
    Z,
    /// Hadamard.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger.
    Tdg,
    /// sqrt(X).
    Sx,
    /// Phase gate, `diag(1, e^{i*theta})`.
    Phase(f64),
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
}

impl Gate {
    /// The 2x2 unitary matrix of this gate, row-major over the
    /// `{|0>, |1>}` basis.
    pub fn matrix(&self) -> [[Complex64; 2]; 2] {
        let zero = Complex64::zero();
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::i();
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        match self {
            Gate::I => [[one, zero], [zero, one]],
            Gate::X => [[zero, one], [one, zero]],
            Gate::Y => [[zero, -i], [i, zero]],
            Gate::Z => [[one, zero], [zero, -one]],
            Gate::H => [[h, h], [h, -h]],
            Gate::S => [[one, zero], [zero, i]],
            Gate::Sdg => [[one, zero], [zero, -i]],
            Gate::T => [[one, zero], [zero, Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]],
            Gate::Tdg => [[one, zero], [zero, Complex64::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)]],
            Gate::Sx => [
                [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
                [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
            ],
            Gate::Phase(theta) => [[one, zero], [zero, Complex64::from_polar(1.0, *theta)]],
            Gate::Rx(theta) => {
                let a = theta / 2.0;
                [
                    [Complex64::new(a.cos(), 0.0), -i * a.sin()],
                    [-i * a.sin(), Complex64::new(a.cos(), 0.0)],
                ]
            }
            Gate::Ry(theta) => {
                let a = theta / 2.0;
                [
                    [Complex64::new(a.cos(), 0.0), Complex64::new(-a.sin(), 0.0)],
                    [Complex64::new(a.sin(), 0.0), Complex64::new(a.cos(), 0.0)],
                ]
            }
            Gate::Rz(theta) => {
                let a = theta / 2.0;
                [
                    [Complex64::from_polar(1.0, -a), zero],
                    [zero, Complex64::from_polar(1.0, a)],
                ]
            }
        }
    }

    /// Short symbol used in circuit diagrams.
    pub fn label(&self) -> &'static str {
        match self {
            Gate::I => "I",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::S => "S",
            Gate::Sdg => "S†",
            Gate::T => "T",
            Gate::Tdg => "T†",
            Gate::Sx => "√X",
            Gate::Phase(_) => "P",
            Gate::Rx(_) => "Rx",
            Gate::Ry(_) => "Ry",
            Gate::Rz(_) => "Rz",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Phase(t) => write!(f, "P({t:.4})"),
            Gate::Rx(t) => write!(f, "Rx({t:.4})"),
            Gate::Ry(t) => write!(f, "Ry({t:.4})"),
            Gate::Rz(t) => write!(f, "Rz({t:.4})"),
            other => write!(f, "{}", other.label()),
        }
    }
}
