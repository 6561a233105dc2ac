//! Conductance (weighted Laplacian) matrix assembly.

use crate::circuit::Circuit;

/// Dense N×N conductance matrix of a resistor network.
///
/// This is the weighted graph Laplacian: for each resistor between nodes
/// `a` and `b` with conductance `g = 1/r`, `g` is added to both diagonal
/// entries `(a,a)` and `(b,b)` and subtracted from `(a,b)` and `(b,a)`.
/// Parallel resistors accumulate by summation, which is the physical law
/// for parallel conductances. Row sums are zero, so the matrix is singular
/// until one node is grounded by the solver.
#[derive(Debug, Clone)]
pub struct ConductanceMatrix {
    /// Matrix entries (row-major)
    entries: Vec<f64>,
    /// Matrix dimension (node count)
    size: usize,
}

impl ConductanceMatrix {
    /// Create a zero matrix of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            entries: vec![0.0; size * size],
            size,
        }
    }

    /// Build the Laplacian of a network by stamping every resistor.
    ///
    /// Entries depend only on the multiset of resistors, not on insertion
    /// order: stamping is pure accumulation.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut matrix = Self::new(circuit.node_count());
        for resistor in circuit.resistors() {
            matrix.stamp_conductance(resistor.a, resistor.b, resistor.conductance());
        }
        matrix
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.entries[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    fn add(&mut self, row: usize, col: usize, value: f64) {
        self.entries[row * self.size + col] += value;
    }

    /// Stamp a conductance between two distinct nodes.
    ///
    /// For a conductance G between nodes a and b:
    ///   A[a,a] += G
    ///   A[b,b] += G
    ///   A[a,b] -= G
    ///   A[b,a] -= G
    pub fn stamp_conductance(&mut self, a: usize, b: usize, g: f64) {
        self.add(a, a, g);
        self.add(b, b, g);
        self.add(a, b, -g);
        self.add(b, a, -g);
    }
}
