//! # Ohmnet
//!
//! An equivalent-resistance solver for resistor networks.
//!
//! This library provides:
//! - A fixed-size resistor network model (weighted undirected graph,
//!   parallel edges allowed)
//! - Conductance-matrix (weighted Laplacian) assembly
//! - A grounded direct solve for node potentials via Gaussian elimination
//!   with partial pivoting
//! - Equivalent resistance and per-resistor currents between any two
//!   terminal nodes
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - [`circuit`] - Network representation and edge insertion
//! - [`solver`] - Laplacian assembly, the grounded linear solve, and the
//!   resistance evaluator
//!
//! ## Usage
//!
//! ```
//! use ohmnet::Circuit;
//!
//! let mut circuit = Circuit::new(3)?;
//! circuit.connect(0, 1, 100.0)?;
//! circuit.connect(1, 2, 200.0)?;
//!
//! // Series chain: 300 ohms between the first and last node
//! let r = circuit.total_resistance()?;
//! assert!((r - 300.0).abs() < 1e-9);
//! # Ok::<(), ohmnet::OhmnetError>(())
//! ```
//!
//! ## Method
//!
//! For each query the network is converted to its weighted Laplacian L
//! (parallel resistors merge as summed conductances), a unit current is
//! injected across the two terminals, one terminal is grounded to remove
//! the Laplacian's inherent singularity, and the reduced system is solved
//! directly. The equivalent resistance is the potential difference between
//! the terminals. Networks with no conductive path between the terminals
//! report an infinite resistance rather than an error.

pub mod circuit;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, Resistor};
pub use error::{OhmnetError, Result};
pub use solver::ConductanceMatrix;
