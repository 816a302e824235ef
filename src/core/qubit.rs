// src/core/qubit.rs

use std::fmt;

/// Index of a qubit within a circuit's quantum register.
///
/// Qubits are addressed by position, `q0` through `q(n-1)`. The index
/// is only meaningful relative to the circuit that owns the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Index of a classical bit within a circuit's classical register.
///
/// Classical bits receive measurement outcomes and gate conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClbitId(pub usize);

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}
