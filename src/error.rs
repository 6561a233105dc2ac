//! Error types for the Ohmnet resistance solver.
//!
//! This module provides a unified error type [`OhmnetError`] that covers
//! all error conditions that can occur during network construction and
//! equivalent-resistance evaluation.

use thiserror::Error;

/// Result type alias using [`OhmnetError`].
pub type Result<T> = std::result::Result<T, OhmnetError>;

/// Unified error type for all Ohmnet operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OhmnetError {
    // ============ Network Construction Errors ============
    /// Network created with zero nodes
    #[error("Invalid network size {node_count}: a network needs at least one node")]
    InvalidSize { node_count: usize },

    /// Node index outside the fixed node range
    #[error("Node {node} is out of range for a {node_count}-node network")]
    InvalidNode { node: usize, node_count: usize },

    /// Resistor with both terminals on the same node
    #[error("Self-loop at node {node}: a resistor must connect two distinct nodes")]
    SelfLoop { node: usize },

    /// Non-positive or non-finite resistance value
    #[error("Invalid resistance {resistance} ohm: resistance must be positive and finite")]
    InvalidResistance { resistance: f64 },

    // ============ Evaluation Errors ============
    /// No conductive path between the two terminals.
    ///
    /// An expected network state: the equivalent resistance of an open
    /// circuit is infinite. The evaluator reports it as such; this variant
    /// surfaces the condition from the solver layer.
    ///
    /// The node fields carry a `_node` suffix: a bare `source` field would
    /// be picked up by `thiserror` as the error's cause.
    #[error("No conductive path between nodes {source_node} and {sink_node}")]
    DisconnectedNetwork {
        source_node: usize,
        sink_node: usize,
    },

    /// Solver produced a non-physical result (negative or NaN resistance).
    ///
    /// Always fatal: indicates a defect in matrix construction or solving,
    /// never clamped or silently returned.
    #[error("Non-physical resistance {value} ohm between nodes {source_node} and {sink_node}")]
    NumericInvariantViolation {
        value: f64,
        source_node: usize,
        sink_node: usize,
    },
}

impl OhmnetError {
    /// Create an out-of-range node error.
    pub fn invalid_node(node: usize, node_count: usize) -> Self {
        Self::InvalidNode { node, node_count }
    }

    /// Create a non-physical-result error.
    pub fn numeric_invariant(value: f64, source_node: usize, sink_node: usize) -> Self {
        Self::NumericInvariantViolation {
            value,
            source_node,
            sink_node,
        }
    }

    /// Create a disconnected-network error.
    pub fn disconnected(source_node: usize, sink_node: usize) -> Self {
        Self::DisconnectedNetwork {
            source_node,
            sink_node,
        }
    }
}
