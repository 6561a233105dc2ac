//! Nodal-analysis solver.
//!
//! This module provides the numerical engine for equivalent-resistance
//! queries.
//!
//! ## Nodal analysis
//!
//! The network's conductance matrix is the weighted graph Laplacian L:
//! node conductance sums on the diagonal, negative inter-node conductances
//! off it. Kirchhoff's current law for the whole network reads
//!
//! ```text
//! L v = i
//! ```
//!
//! where v is the vector of node potentials and i the vector of injected
//! currents. L is singular by construction (its row sums are zero), which
//! reflects the gauge freedom of potentials: they are only meaningful up
//! to an additive constant. Grounding one node (fixing its potential to
//! zero and deleting its row and column) removes the singularity while
//! leaving all potential differences well-defined.
//!
//! For an equivalent-resistance query between terminals s and t, a unit
//! current is injected at s and extracted at t, t is grounded, and the
//! reduced system is solved directly. The resistance is then v[s] - v[t],
//! since R = V / I and I is 1 A.

mod analysis;
mod linear;
mod matrix;

pub use analysis::{branch_currents, equivalent_resistance};
pub use linear::solve_potentials;
pub use matrix::ConductanceMatrix;

/// Smallest pivot accepted by the elimination; anything below this is
/// treated as structural singularity (a disconnected network).
pub const PIVOT_TOLERANCE: f64 = 1e-12;
