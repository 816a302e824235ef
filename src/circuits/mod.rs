// src/circuits/mod.rs

//! Circuit representation: an ordered sequence of operations over fixed
//! quantum and classical registers, plus a builder and composition by
//! qubit index.

mod random;

pub use random::random_circuit;

use crate::core::{QubitId, QtrioError};
use crate::operations::Operation;
use std::fmt;

/// An ordered sequence of [`Operation`]s over `num_qubits` qubits and
/// `num_clbits` classical bits.
///
/// A circuit is a transient description: it is constructed, possibly
/// composed with fragments like an oracle or a scrambling block, handed
/// to a [`Simulator`](crate::simulation::Simulator), and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    num_clbits: usize,
    name: Option<String>,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates an empty circuit over the given register sizes.
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            name: None,
            operations: Vec::new(),
        }
    }

    /// Sets a display name, consuming and returning the circuit for
    /// chaining at construction sites.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The circuit's display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of qubits in the quantum register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of bits in the classical register.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// Appends a single operation.
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends every operation from an iterator.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
    }

    /// Splices `fragment` into this circuit, mapping the fragment's
    /// qubit `i` onto `qubits[i]`.
    ///
    /// The fragment must not use classical bits; oracles, diffusion
    /// operators, and scrambling blocks are purely unitary.
    pub fn compose(&mut self, fragment: &Circuit, qubits: &[QubitId]) -> Result<(), QtrioError> {
        if fragment.num_qubits != qubits.len() {
            return Err(QtrioError::operation(format!(
                "cannot compose a {}-qubit fragment onto {} qubits",
                fragment.num_qubits,
                qubits.len()
            )));
        }
        if fragment.num_clbits != 0 {
            return Err(QtrioError::operation(
                "composed fragments must not use classical bits",
            ));
        }
        for op in &fragment.operations {
            self.operations.push(op.remapped(qubits)?);
        }
        Ok(())
    }

    /// The ordered operation sequence.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Total number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Builds a [`Circuit`] with method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Starts a builder for the given register sizes.
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits, num_clbits),
        }
    }

    /// Names the circuit being built.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.circuit = self.circuit.with_name(name);
        self
    }

    /// Adds a single operation.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds every operation from an iterator.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Finalizes and returns the circuit.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

//-------------------------------------------------------------------------
// ASCII rendering
//-------------------------------------------------------------------------

const GATE_WIDTH: usize = 7;
const WIRE: &str = "───────";

/// Writes a cell into the diagram grid. Rows outside the register are
/// ignored; the simulator rejects out-of-range qubits when the circuit
/// runs, but the renderer must not panic on them.
fn set_cell(grid: &mut [Vec<String>], row: usize, col: usize, cell: String) {
    if let Some(cells) = grid.get_mut(row) {
        cells[col] = cell;
    }
}

/// Draws a vertical connector below `row`, ignoring rows outside the
/// register.
fn set_link(link: &mut [Vec<char>], row: usize, col: usize) {
    if let Some(cols) = link.get_mut(row) {
        cols[col] = '│';
    }
}

/// Centers a symbol inside a wire segment of `GATE_WIDTH` characters.
fn format_cell(symbol: &str) -> String {
    let len = symbol.chars().count();
    if len >= GATE_WIDTH {
        return symbol.chars().take(GATE_WIDTH).collect();
    }
    let dashes = GATE_WIDTH - len;
    let pre = dashes / 2;
    let post = dashes - pre;
    format!("{}{}{}", "─".repeat(pre), symbol, "─".repeat(post))
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("circuit");
        writeln!(
            f,
            "{}[{} ops on {} qubits, {} clbits]",
            name,
            self.operations.len(),
            self.num_qubits,
            self.num_clbits
        )?;
        if self.num_qubits == 0 || self.operations.is_empty() {
            return Ok(());
        }

        let rows = self.num_qubits;
        let cols = self.operations.len();
        let mut grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); cols]; rows];
        // Connector drawn below row r at column t.
        let mut link: Vec<Vec<char>> = vec![vec![' '; cols]; rows];

        for (t, op) in self.operations.iter().enumerate() {
            match op {
                Operation::Gate { target, gate } => {
                    set_cell(&mut grid, target.0, t, format_cell(gate.label()));
                }
                Operation::Prepare { target, .. } => {
                    set_cell(&mut grid, target.0, t, format_cell("ψ"));
                }
                Operation::Measure { target, bit } => {
                    set_cell(&mut grid, target.0, t, format_cell(&format!("M{}", bit.0)));
                }
                Operation::Conditioned { bit, target, gate } => {
                    set_cell(&mut grid, target.0, t, format_cell(&format!("{}?{}", gate.label(), bit.0)));
                }
                Operation::Controlled { control, target, gate } => {
                    set_cell(&mut grid, control.0, t, format_cell("@"));
                    set_cell(&mut grid, target.0, t, format_cell(gate.label()));
                    let lo = control.0.min(target.0);
                    let hi = control.0.max(target.0);
                    for row in lo..hi {
                        set_link(&mut link, row, t);
                    }
                }
                Operation::MultiControlled { controls, target, gate } => {
                    for c in controls {
                        set_cell(&mut grid, c.0, t, format_cell("@"));
                    }
                    set_cell(&mut grid, target.0, t, format_cell(gate.label()));
                    let lo = controls.iter().map(|q| q.0).min().unwrap_or(target.0).min(target.0);
                    let hi = controls.iter().map(|q| q.0).max().unwrap_or(target.0).max(target.0);
                    for row in lo..hi {
                        set_link(&mut link, row, t);
                    }
                }
                Operation::Barrier => {
                    for row in grid.iter_mut() {
                        row[t] = format_cell("░");
                    }
                }
            }
        }

        let label_width = format!("q{}", rows - 1).len() + 2;
        for r in 0..rows {
            write!(f, "{:<label_width$}", format!("q{r}: "))?;
            writeln!(f, "{}", grid[r].join(""))?;
            if r + 1 < rows {
                write!(f, "{}", " ".repeat(label_width))?;
                for t in 0..cols {
                    let pad = GATE_WIDTH - 1;
                    let pre = pad / 2;
                    write!(f, "{}{}{}", " ".repeat(pre), link[r][t], " ".repeat(pad - pre))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
