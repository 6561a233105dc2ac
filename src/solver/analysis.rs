//! Equivalent-resistance evaluation.

use crate::circuit::{Circuit, Resistor};
use crate::error::{OhmnetError, Result};

use super::linear::solve_potentials;
use super::matrix::ConductanceMatrix;

/// Equivalent resistance between two terminals of a network.
///
/// Builds the conductance matrix, solves for potentials with a unit
/// current driven from `source` to `sink`, and reads the resistance off
/// as `potential[source] - potential[sink]` (R = V / I with I = 1 A).
///
/// An open circuit between the terminals yields `Ok(f64::INFINITY)`: a
/// disconnected network is an expected state, not a caller error. A
/// negative or NaN result is a solver defect and fails with
/// [`OhmnetError::NumericInvariantViolation`].
pub fn equivalent_resistance(circuit: &Circuit, source: usize, sink: usize) -> Result<f64> {
    circuit.check_node(source)?;
    circuit.check_node(sink)?;
    if source == sink {
        // Zero-length path
        return Ok(0.0);
    }

    let laplacian = ConductanceMatrix::from_circuit(circuit);
    let potentials = match solve_potentials(&laplacian, source, sink) {
        Ok(potentials) => potentials,
        Err(OhmnetError::DisconnectedNetwork { .. }) => return Ok(f64::INFINITY),
        Err(err) => return Err(err),
    };

    let resistance = potentials[source] - potentials[sink];
    if !resistance.is_finite() || resistance < 0.0 {
        return Err(OhmnetError::numeric_invariant(resistance, source, sink));
    }
    Ok(resistance)
}

/// Per-resistor currents under a unit injection from `source` to `sink`.
///
/// The current through each resistor is its potential drop divided by its
/// resistance, oriented from the resistor's `a` terminal to its `b`
/// terminal. Fails with [`OhmnetError::DisconnectedNetwork`] when the
/// terminals have no conductive path; there is no current distribution to
/// report for an open circuit.
pub fn branch_currents(
    circuit: &Circuit,
    source: usize,
    sink: usize,
) -> Result<Vec<(Resistor, f64)>> {
    circuit.check_node(source)?;
    circuit.check_node(sink)?;
    if source == sink {
        return Ok(circuit.resistors().iter().map(|&r| (r, 0.0)).collect());
    }

    let laplacian = ConductanceMatrix::from_circuit(circuit);
    let potentials = solve_potentials(&laplacian, source, sink)?;

    Ok(circuit
        .resistors()
        .iter()
        .map(|&r| {
            let current = (potentials[r.a] - potentials[r.b]) / r.resistance;
            (r, current)
        })
        .collect())
}

impl Circuit {
    /// Equivalent resistance between the default terminals: node 0 and
    /// the last node (two-port convention).
    pub fn total_resistance(&self) -> Result<f64> {
        self.total_resistance_between(0, self.node_count() - 1)
    }

    /// Equivalent resistance between two chosen terminal nodes.
    ///
    /// See [`equivalent_resistance`] for the open-circuit and invariant
    /// semantics.
    pub fn total_resistance_between(&self, terminal_a: usize, terminal_b: usize) -> Result<f64> {
        equivalent_resistance(self, terminal_a, terminal_b)
    }

    /// Current through every resistor for a unit current driven between
    /// the two terminals.
    pub fn branch_currents(
        &self,
        terminal_a: usize,
        terminal_b: usize,
    ) -> Result<Vec<(Resistor, f64)>> {
        branch_currents(self, terminal_a, terminal_b)
    }
}
