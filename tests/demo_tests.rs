// tests/demo_tests.rs

use num_complex::Complex64;
use qtrio::demos::{
    black_hole_toy_model_seeded, build_teleportation_circuit, diffusion_operator,
    grover_iterations, grovers_algorithm, mark_oracle, quantum_teleportation,
};
use qtrio::{Circuit, Gate, Operation, QtrioError, QubitId, Simulator};

#[test]
fn teleportation_transfers_any_input_state() -> Result<(), QtrioError> {
    // The two measured bits are uniformly random but every key has
    // exactly two classical bits, and all shots are accounted for.
    let (counts, circuit) =
        quantum_teleportation(Complex64::new(0.6, 0.0), Complex64::new(0.8, 0.0), 128, true)?;
    assert_eq!(counts.total(), 128);
    for (outcome, _) in counts.iter() {
        assert_eq!(outcome.len(), 2);
    }
    let circuit = circuit.expect("circuit was requested");
    assert_eq!(circuit.num_qubits(), 3);
    assert_eq!(circuit.num_clbits(), 2);
    Ok(())
}

#[test]
fn teleportation_rejects_the_zero_state() {
    let err = build_teleportation_circuit(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, QtrioError::InvalidParameter { .. }));
}

#[test]
fn grover_two_qubits_finds_the_marked_state_with_certainty() -> Result<(), QtrioError> {
    // One iteration on n = 2 rotates the state exactly onto the target.
    let (counts, _) = grovers_algorithm(2, "10", 256, None, false)?;
    assert_eq!(counts.get("10"), 256);
    Ok(())
}

#[test]
fn grover_three_qubits_amplifies_the_marked_state() -> Result<(), QtrioError> {
    // Two iterations on n = 3 reach ~94.5% success probability.
    let (counts, circuit) = grovers_algorithm(3, "101", 512, None, true)?;
    let (winner, freq) = counts.most_frequent().expect("non-empty counts");
    assert_eq!(winner, "101");
    assert!(freq > 256, "marked state only drew {freq} of 512 shots");
    assert!(circuit.is_some());
    Ok(())
}

#[test]
fn grover_pads_short_marked_strings_on_the_left() -> Result<(), QtrioError> {
    // "1" over three qubits means "001".
    let (counts, _) = grovers_algorithm(3, "1", 512, None, false)?;
    let (winner, _) = counts.most_frequent().expect("non-empty counts");
    assert_eq!(winner, "001");
    Ok(())
}

#[test]
fn grover_rejects_bad_inputs() {
    assert!(matches!(
        grovers_algorithm(0, "", 16, None, false).unwrap_err(),
        QtrioError::InvalidParameter { .. }
    ));
    assert!(matches!(
        grovers_algorithm(2, "102", 16, None, false).unwrap_err(),
        QtrioError::InvalidParameter { .. }
    ));
    assert!(matches!(
        grovers_algorithm(2, "011", 16, None, false).unwrap_err(),
        QtrioError::InvalidParameter { .. }
    ));
}

#[test]
fn grover_accepts_a_custom_oracle() -> Result<(), QtrioError> {
    // Hand-built oracle for |11> on two qubits: a controlled Z.
    let mut oracle = Circuit::new(2, 0);
    oracle.add_operation(Operation::Controlled {
        control: QubitId(0),
        target: QubitId(1),
        gate: Gate::Z,
    });
    let (counts, _) = grovers_algorithm(2, "11", 256, Some(oracle), false)?;
    assert_eq!(counts.get("11"), 256);
    Ok(())
}

#[test]
fn grover_rejects_a_mismatched_custom_oracle() {
    let oracle = Circuit::new(3, 0);
    let err = grovers_algorithm(2, "11", 16, Some(oracle), false).unwrap_err();
    assert!(matches!(err, QtrioError::InvalidParameter { .. }));
}

#[test]
fn iteration_count_follows_the_quarter_pi_rule() {
    assert_eq!(grover_iterations(1), 1);
    assert_eq!(grover_iterations(2), 1);
    assert_eq!(grover_iterations(3), 2);
    assert_eq!(grover_iterations(4), 3);
}

#[test]
fn oracle_applied_twice_is_the_identity() -> Result<(), QtrioError> {
    // Phase oracles are self-inverse; check on a full superposition.
    let n = 3;
    let mut circuit = Circuit::new(n, 0);
    for q in 0..n {
        circuit.add_operation(Operation::Gate { target: QubitId(q), gate: Gate::H });
    }
    let oracle = mark_oracle(n, "110")?;
    circuit.compose(&oracle, &[QubitId(0), QubitId(1), QubitId(2)])?;
    circuit.compose(&oracle, &[QubitId(0), QubitId(1), QubitId(2)])?;

    // Phases must cancel, restoring the all-positive uniform state.
    let state = Simulator::new().statevector(&circuit)?;
    let even = 1.0 / ((1 << n) as f64).sqrt();
    for (k, amp) in state.vector().iter().enumerate() {
        assert!((amp - Complex64::new(even, 0.0)).norm() < 1e-9, "index {k} disturbed");
    }
    Ok(())
}

#[test]
fn diffusion_operator_covers_every_qubit() {
    let diffusion = diffusion_operator(3);
    assert_eq!(diffusion.num_qubits(), 3);
    let touched: std::collections::BTreeSet<_> = diffusion
        .operations()
        .iter()
        .flat_map(|op| op.involved_qubits())
        .collect();
    assert_eq!(touched.len(), 3);
}

#[test]
fn black_hole_entropy_lands_in_the_unit_interval() -> Result<(), QtrioError> {
    let (circuit, entropy) = black_hole_toy_model_seeded(3, 2024)?;
    assert_eq!(circuit.num_qubits(), 3);
    assert!(entropy > 0.0, "scrambled radiation stayed pure");
    assert!(entropy <= 1.0 + 1e-9, "entropy {entropy} above one bit");
    Ok(())
}

#[test]
fn black_hole_is_reproducible_under_a_seed() -> Result<(), QtrioError> {
    let (_, a) = black_hole_toy_model_seeded(3, 7)?;
    let (_, b) = black_hole_toy_model_seeded(3, 7)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn black_hole_needs_three_qubits() {
    assert!(black_hole_toy_model_seeded(2, 1).is_err());
}
