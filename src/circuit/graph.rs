//! Resistor network graph structure.

use crate::error::{OhmnetError, Result};

use super::types::Resistor;

/// A resistor network with a fixed set of nodes.
///
/// Nodes are the integers `0..node_count` and exist from construction;
/// they are never added or removed. Resistors are appended with
/// [`connect`](Circuit::connect). Once populated, the network is queried
/// read-only; queries build their own transient derived data, so a shared
/// `&Circuit` may be queried from multiple threads without locking.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Number of nodes (fixed at construction)
    node_count: usize,
    /// All resistors, in insertion order, parallel edges preserved
    resistors: Vec<Resistor>,
}

impl Circuit {
    /// Create an empty network with `node_count` nodes.
    ///
    /// Fails with [`OhmnetError::InvalidSize`] when `node_count` is zero.
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(OhmnetError::InvalidSize { node_count });
        }
        Ok(Self {
            node_count,
            resistors: Vec::new(),
        })
    }

    /// Add a resistor of `resistance` ohms between nodes `a` and `b`.
    ///
    /// Parallel resistors are not deduplicated: the edge list retains the
    /// literal topology the caller specified, and parallel conductances
    /// are summed when the conductance matrix is built.
    ///
    /// On any error the network is left unchanged.
    pub fn connect(&mut self, a: usize, b: usize, resistance: f64) -> Result<()> {
        if a >= self.node_count {
            return Err(OhmnetError::invalid_node(a, self.node_count));
        }
        if b >= self.node_count {
            return Err(OhmnetError::invalid_node(b, self.node_count));
        }
        if a == b {
            return Err(OhmnetError::SelfLoop { node: a });
        }
        // NaN fails the comparison too, so non-finite values never get in.
        if !(resistance > 0.0 && resistance.is_finite()) {
            return Err(OhmnetError::InvalidResistance { resistance });
        }
        self.resistors.push(Resistor { a, b, resistance });
        Ok(())
    }

    /// Number of nodes in the network.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of resistors in the network (parallel edges counted).
    pub fn resistor_count(&self) -> usize {
        self.resistors.len()
    }

    /// All resistors, in insertion order.
    pub fn resistors(&self) -> &[Resistor] {
        &self.resistors
    }

    /// Check that `node` is a valid node index.
    pub(crate) fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.node_count {
            return Err(OhmnetError::invalid_node(node, self.node_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_network_rejected() {
        assert_eq!(
            Circuit::new(0).unwrap_err(),
            OhmnetError::InvalidSize { node_count: 0 }
        );
    }

    #[test]
    fn test_connect_out_of_range() {
        let mut circuit = Circuit::new(3).unwrap();
        assert_eq!(
            circuit.connect(0, 3, 10.0).unwrap_err(),
            OhmnetError::InvalidNode {
                node: 3,
                node_count: 3
            }
        );
        assert_eq!(circuit.resistor_count(), 0);
    }

    #[test]
    fn test_connect_self_loop() {
        let mut circuit = Circuit::new(5).unwrap();
        assert_eq!(
            circuit.connect(3, 3, 5.0).unwrap_err(),
            OhmnetError::SelfLoop { node: 3 }
        );
        // Rejected edge leaves the graph unchanged
        assert_eq!(circuit.resistor_count(), 0);
    }

    #[test]
    fn test_connect_invalid_resistance() {
        let mut circuit = Circuit::new(2).unwrap();
        for bad in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                circuit.connect(0, 1, bad),
                Err(OhmnetError::InvalidResistance { .. })
            ));
        }
        assert_eq!(circuit.resistor_count(), 0);
    }

    #[test]
    fn test_parallel_edges_preserved() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.connect(0, 1, 4.0).unwrap();
        circuit.connect(0, 1, 4.0).unwrap();
        circuit.connect(1, 0, 2.0).unwrap();
        assert_eq!(circuit.resistor_count(), 3);
    }
}
