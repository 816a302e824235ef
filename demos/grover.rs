//! Grover's search demo.
//!
//! Amplifies one marked basis state out of 2^n with ~sqrt(2^n) oracle
//! calls, then samples the register to show the concentration.

use qtrio::demos::{grover_iterations, grovers_algorithm};
use qtrio::QtrioError;

fn main() -> Result<(), QtrioError> {
    println!("--- qtrio Demo: Grover's Search ---");

    let n = 3;
    let marked = "101";
    let shots = 1024;
    println!("\nSearching {} states for |{marked}> with {} iteration(s)", 1 << n, grover_iterations(n));

    let (counts, circuit) = grovers_algorithm(n, marked, shots, None, true)?;

    if let Some(circuit) = circuit {
        println!("\nCircuit:\n{circuit}");
    }

    println!("Sampled outcomes over {shots} shots:");
    println!("{counts}");

    match counts.most_frequent() {
        Some((winner, freq)) if winner == marked => {
            println!("Found |{winner}> in {freq}/{shots} shots (uniform guessing: {}/{shots}).",
                shots / (1u64 << n));
        }
        Some((winner, freq)) => {
            println!("Unexpected mode |{winner}> ({freq}/{shots}); statistical fluke, rerun.");
        }
        None => unreachable!("shots > 0 always records outcomes"),
    }

    Ok(())
}
