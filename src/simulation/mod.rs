// src/simulation/mod.rs

//! Executes circuits: shot-based sampling into [`Counts`] and
//! deterministic statevector evaluation.

mod counts;
pub(crate) mod engine;

pub use counts::Counts;

use crate::circuits::Circuit;
use crate::core::{QtrioError, StateVector};
use crate::operations::Operation;
use engine::SimulationEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Executes circuits on a dense statevector backend.
///
/// A fresh engine is created per shot; nothing persists between runs,
/// so every call is independent. By default outcomes are sampled from
/// the thread RNG; [`Simulator::with_seed`] makes runs reproducible.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    seed: Option<u64>,
}

impl Simulator {
    /// Creates a simulator sampling from the thread RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator whose measurement sampling is driven by a
    /// seeded RNG, making `run` reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Runs `circuit` for `shots` repetitions and tallies the classical
    /// register after each shot.
    ///
    /// Mid-circuit measurements collapse the state within a shot, so
    /// each shot is a full independent execution.
    pub fn run(&self, circuit: &Circuit, shots: u64) -> Result<Counts, QtrioError> {
        if shots == 0 {
            return Err(QtrioError::parameter("shots must be at least 1"));
        }
        match self.seed {
            Some(seed) => self.run_shots(circuit, shots, &mut StdRng::seed_from_u64(seed)),
            None => self.run_shots(circuit, shots, &mut rand::rng()),
        }
    }

    fn run_shots<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        shots: u64,
        rng: &mut R,
    ) -> Result<Counts, QtrioError> {
        let mut counts = Counts::new();
        for _ in 0..shots {
            let mut engine = SimulationEngine::init(circuit.num_qubits(), circuit.num_clbits())?;
            for op in circuit.operations() {
                engine.apply_operation(op, rng)?;
            }
            counts.record(&engine.classical_bitstring());
        }
        Ok(counts)
    }

    /// Executes `circuit` once and returns the final state vector.
    ///
    /// Fails with `InvalidOperation` if the circuit contains a
    /// measurement, since a collapsed state is not a meaningful
    /// deterministic result.
    pub fn statevector(&self, circuit: &Circuit) -> Result<StateVector, QtrioError> {
        let mut engine = SimulationEngine::init(circuit.num_qubits(), circuit.num_clbits())?;
        // Never sampled: measurements are rejected below.
        let mut rng = StdRng::seed_from_u64(0);
        for op in circuit.operations() {
            if matches!(op, Operation::Measure { .. }) {
                return Err(QtrioError::operation(
                    "statevector execution does not support measurement",
                ));
            }
            engine.apply_operation(op, &mut rng)?;
        }
        Ok(engine.into_state())
    }
}
