//! Ohmnet - Resistor Network Resistance Calculator
//!
//! Builds the bundled demo network (a 9-node resistive mesh) and prints
//! the equivalent resistance between two terminals.
//!
//! # Usage
//!
//! ```bash
//! ohmnet                  # resistance between node 0 and node 8
//! ohmnet --from 3 --to 6  # any terminal pair
//! ohmnet --currents       # per-resistor currents for a 1 A drive
//! ```

use clap::Parser;
use ohmnet::{Circuit, Result};

/// Resistor network equivalent-resistance calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source terminal node (defaults to the first node)
    #[arg(long, value_name = "NODE")]
    from: Option<usize>,

    /// Sink terminal node (defaults to the last node)
    #[arg(long, value_name = "NODE")]
    to: Option<usize>,

    /// Also print the current through each resistor for a 1 A drive
    #[arg(long)]
    currents: bool,
}

/// The demo network: a 9-node mesh whose end-to-end resistance works out
/// to exactly 20 ohms.
fn demo_network() -> Result<Circuit> {
    let mut circuit = Circuit::new(9)?;

    circuit.connect(0, 1, 2.0)?;

    circuit.connect(1, 2, 6.0)?;
    circuit.connect(2, 3, 2.0)?;

    circuit.connect(3, 4, 10.0)?;
    circuit.connect(3, 7, 20.0)?;
    circuit.connect(3, 8, 20.0)?;

    circuit.connect(4, 5, 10.0)?;
    circuit.connect(4, 6, 20.0)?;
    circuit.connect(4, 7, 20.0)?;

    circuit.connect(5, 6, 10.0)?;
    circuit.connect(6, 7, 10.0)?;
    circuit.connect(7, 8, 10.0)?;

    Ok(circuit)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let circuit = demo_network()?;
    let from = args.from.unwrap_or(0);
    let to = args.to.unwrap_or(circuit.node_count() - 1);

    let resistance = circuit.total_resistance_between(from, to)?;
    if resistance.is_infinite() {
        println!("open circuit between node {from} and node {to}");
    } else {
        println!("R({from} <-> {to}) = {resistance} ohm");
    }

    if args.currents && resistance.is_finite() {
        for (resistor, current) in circuit.branch_currents(from, to)? {
            println!("  {resistor}: {current:+.6} A");
        }
    }

    Ok(())
}
