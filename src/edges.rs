//! Nearest-neighbour graph of a root system, as drawn behind the nodes.

use serde::{Deserialize, Serialize};

use crate::vector::Root;

/// Two roots are joined when their inner product is 1 within this slack.
pub const EDGE_THRESHOLD: f64 = 0.05;

/// Undirected edge between two root indices, `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

/// All pairs at 60°, in lexicographic (source, target) order.
pub fn root_edges(roots: &[Root]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..roots.len() {
        for j in (i + 1)..roots.len() {
            if (roots[i].dot(&roots[j]) - 1.0).abs() < EDGE_THRESHOLD {
                edges.push(Edge { source: i, target: j });
            }
        }
    }
    edges
}

/// Number of edges touching each root. Endpoints at or past `n_roots` are
/// not counted.
pub fn degrees(n_roots: usize, edges: &[Edge]) -> Vec<usize> {
    let mut deg = vec![0; n_roots];
    for e in edges {
        for end in [e.source, e.target] {
            if let Some(d) = deg.get_mut(end) {
                *d += 1;
            }
        }
    }
    deg
}
