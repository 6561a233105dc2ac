//! Core types for network representation.

use std::fmt;

/// A resistor between two nodes of the network.
///
/// The node pair is unordered: `(a, b, r)` and `(b, a, r)` describe the
/// same element. Parallel resistors between the same pair are kept as
/// separate entries and merged only when the conductance matrix is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    /// First terminal node
    pub a: usize,
    /// Second terminal node
    pub b: usize,
    /// Resistance in ohms (strictly positive, finite)
    pub resistance: f64,
}

impl Resistor {
    /// Conductance of this resistor in siemens (1/R).
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }

    /// Whether this resistor touches the given node.
    pub fn touches(&self, node: usize) -> bool {
        self.a == node || self.b == node
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}--N{} {} ohm", self.a, self.b, self.resistance)
    }
}
