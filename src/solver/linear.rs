//! Grounded linear solve for node potentials.

use crate::error::{OhmnetError, Result};

use super::matrix::ConductanceMatrix;
use super::PIVOT_TOLERANCE;

/// Solve for node potentials under a unit current injection.
///
/// Injects +1 A at `source` and -1 A at `sink`, grounds the sink (its
/// potential is fixed at 0 to remove the Laplacian's gauge freedom), and
/// solves the reduced system obtained by deleting the sink's row and
/// column. The returned vector has length N with 0 reinserted at the
/// sink's index.
///
/// Nodes with no conductive path to the sink are pruned before the solve:
/// their rows would make the reduced matrix singular, yet they carry no
/// current, so they sit at the reference potential. Only when the source
/// itself has no path to the sink is the query an open circuit, signalled
/// as [`OhmnetError::DisconnectedNetwork`] - never a panic or NaN. A
/// pivot below [`PIVOT_TOLERANCE`] in the pruned system is residual
/// structural degeneracy and is reported the same way.
///
/// `source` and `sink` must be distinct indices below the matrix
/// dimension; the evaluator validates terminals before calling in here.
pub fn solve_potentials(
    laplacian: &ConductanceMatrix,
    source: usize,
    sink: usize,
) -> Result<Vec<f64>> {
    let n = laplacian.size();
    debug_assert!(source < n && sink < n && source != sink);

    let connected = reachable_from(laplacian, sink);
    if !connected[source] {
        return Err(OhmnetError::disconnected(source, sink));
    }

    // Dense indices for the sink's component, minus the sink itself.
    let mut reduced = vec![usize::MAX; n];
    let mut kept = Vec::with_capacity(n - 1);
    for node in 0..n {
        if connected[node] && node != sink {
            reduced[node] = kept.len();
            kept.push(node);
        }
    }
    let size = kept.len();

    let mut a = vec![0.0; size * size];
    for (row, &i) in kept.iter().enumerate() {
        for (col, &j) in kept.iter().enumerate() {
            a[row * size + col] = laplacian.get(i, j);
        }
    }

    // Unit current injection; the -1 A at the sink went with its row.
    let mut x = vec![0.0; size];
    x[reduced[source]] = 1.0;

    // Gaussian elimination with partial pivoting, eliminating in place
    // with the right-hand side carried along.
    for k in 0..size {
        let mut max_val = a[k * size + k].abs();
        let mut max_row = k;
        for i in (k + 1)..size {
            let val = a[i * size + k].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < PIVOT_TOLERANCE {
            return Err(OhmnetError::disconnected(source, sink));
        }

        if max_row != k {
            for j in k..size {
                a.swap(k * size + j, max_row * size + j);
            }
            x.swap(k, max_row);
        }

        let pivot = a[k * size + k];
        for i in (k + 1)..size {
            let factor = a[i * size + k] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in (k + 1)..size {
                a[i * size + j] -= factor * a[k * size + j];
            }
            x[i] -= factor * x[k];
        }
    }

    // Back substitution (U * x = y)
    for i in (0..size).rev() {
        for j in (i + 1)..size {
            x[i] -= a[i * size + j] * x[j];
        }
        x[i] /= a[i * size + i];
    }

    // Reinsert the grounded sink and the pruned nodes at potential 0.
    let mut potentials = vec![0.0; n];
    for (row, &node) in kept.iter().enumerate() {
        potentials[node] = x[row];
    }
    Ok(potentials)
}

/// Nodes reachable from `start` through nonzero conductances.
///
/// Off-diagonal Laplacian entries are sums of negated conductances, all
/// strictly positive quantities, so a zero entry means no edge.
fn reachable_from(laplacian: &ConductanceMatrix, start: usize) -> Vec<bool> {
    let n = laplacian.size();
    let mut seen = vec![false; n];
    let mut stack = vec![start];
    seen[start] = true;
    while let Some(node) = stack.pop() {
        for next in 0..n {
            if next != node && !seen[next] && laplacian.get(node, next) != 0.0 {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Circuit;

    #[test]
    fn test_single_resistor_potentials() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.connect(0, 1, 5.0).unwrap();

        let m = ConductanceMatrix::from_circuit(&circuit);
        let v = solve_potentials(&m, 0, 1).unwrap();
        // 1 A through 5 ohm drops 5 V; the sink is grounded
        assert!((v[0] - 5.0).abs() < 1e-12);
        assert!(v[1] == 0.0);
    }

    #[test]
    fn test_sink_in_middle_of_index_range() {
        let mut circuit = Circuit::new(3).unwrap();
        circuit.connect(0, 1, 2.0).unwrap();
        circuit.connect(1, 2, 3.0).unwrap();

        let m = ConductanceMatrix::from_circuit(&circuit);
        let v = solve_potentials(&m, 0, 1).unwrap();
        assert!((v[0] - 2.0).abs() < 1e-12);
        assert!(v[1] == 0.0);
        // Node 2 carries no current, so it floats at the sink potential
        assert!(v[2].abs() < 1e-12);
    }

    #[test]
    fn test_disconnected_terminals() {
        let mut circuit = Circuit::new(4).unwrap();
        circuit.connect(0, 1, 1.0).unwrap();
        circuit.connect(2, 3, 1.0).unwrap();

        let m = ConductanceMatrix::from_circuit(&circuit);
        assert_eq!(
            solve_potentials(&m, 0, 3).unwrap_err(),
            OhmnetError::DisconnectedNetwork {
                source_node: 0,
                sink_node: 3
            }
        );
    }

    #[test]
    fn test_isolated_terminal() {
        let mut circuit = Circuit::new(3).unwrap();
        circuit.connect(0, 1, 1.0).unwrap();

        let m = ConductanceMatrix::from_circuit(&circuit);
        assert!(matches!(
            solve_potentials(&m, 0, 2),
            Err(OhmnetError::DisconnectedNetwork { .. })
        ));
    }

    #[test]
    fn test_floating_node_pruned() {
        // Node 2 has no edges at all; the solve between 0 and 1 must not
        // see its empty row.
        let mut circuit = Circuit::new(3).unwrap();
        circuit.connect(0, 1, 1.0).unwrap();

        let m = ConductanceMatrix::from_circuit(&circuit);
        let v = solve_potentials(&m, 0, 1).unwrap();
        assert!((v[0] - 1.0).abs() < 1e-12);
        assert!(v[1] == 0.0);
        assert!(v[2] == 0.0);
    }

    #[test]
    fn test_floating_section_pruned() {
        // A separate 3-4 section unrelated to the queried terminals
        let mut circuit = Circuit::new(5).unwrap();
        circuit.connect(0, 1, 2.0).unwrap();
        circuit.connect(1, 2, 2.0).unwrap();
        circuit.connect(3, 4, 7.0).unwrap();

        let m = ConductanceMatrix::from_circuit(&circuit);
        let v = solve_potentials(&m, 0, 2).unwrap();
        assert!((v[0] - 4.0).abs() < 1e-12);
        assert!((v[1] - 2.0).abs() < 1e-12);
        assert!(v[3] == 0.0 && v[4] == 0.0);
    }
}
