//! Graph algorithms.
//!
//! Every function here takes the graph by shared reference and returns a
//! fresh value owned by the caller; no algorithm mutates its input.
//! Preconditions on the graph flavor (directed vs. undirected, weighted vs.
//! unweighted) are programmer errors and panic; empty results (no path, no
//! cycle, no spanning tree) come back as `None`.

use std::error::Error;
use std::fmt;

use hashbrown::HashMap;

use crate::graph::VertexId;

mod articulation_points;
mod bellman_ford;
mod bridges;
mod components;
mod cycles;
mod dijkstra;
mod euler;
mod floyd_warshall;
mod hamiltonian;
mod matching;
mod maximum_flow;
mod min_spanning_tree;
mod paths;
mod scc;
mod toposort;
mod traversal;

pub use articulation_points::articulation_points;
pub use bellman_ford::{bellman_ford, bellman_ford_path};
pub use bridges::bridges;
pub use components::{component_count, components};
pub use cycles::{cycles, has_cycle, is_bipartite};
pub use dijkstra::{dijkstra, dijkstra_path, dijkstra_with_predecessors};
pub use euler::{eulerian_circuit, has_euler_circuit};
pub use floyd_warshall::{floyd_path, floyd_warshall, floyd_warshall_paths};
pub use hamiltonian::{hamiltonian_circuit, hamiltonian_path};
pub use matching::{bipartite_matching, hungarian_matching};
pub use maximum_flow::{max_flow, MaxFlow};
pub use min_spanning_tree::{kruskal, prim};
pub use paths::{has_path, one_path, path_to, single_source_path, Order};
pub use scc::kosaraju_scc;
pub use toposort::toposort;
pub use traversal::{bfs, dfs, dfs_post_order};

/// An algorithm error: a cycle of negative total weight was found in the
/// graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegativeCycle(());

impl NegativeCycle {
    pub(crate) fn new() -> Self {
        NegativeCycle(())
    }
}

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("negative cycle detected")
    }
}

impl Error for NegativeCycle {}

/// Reconstruct the vertex sequence `start ..= last` from a parent map.
///
/// Walks parents from `last` until it reaches `start` or a vertex that is
/// its own parent; both endpoints are included in the result.
pub(crate) fn track_path(
    parents: &HashMap<VertexId, VertexId>,
    last: VertexId,
    start: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![last];
    let mut current = last;
    while let Some(&parent) = parents.get(&current) {
        if parent == current {
            break;
        }
        path.push(parent);
        if parent == start {
            break;
        }
        current = parent;
    }
    path.reverse();
    path
}
