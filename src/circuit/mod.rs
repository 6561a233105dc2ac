//! Resistor network representation.
//!
//! This module provides the user-facing network model. The [`Circuit`]
//! struct holds a fixed node set and the list of resistors connecting
//! them, in a form suitable for nodal analysis.

mod graph;
mod types;

pub use graph::Circuit;
pub use types::Resistor;
