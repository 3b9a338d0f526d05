//! Find all bridges in an undirected graph.

use hashbrown::HashMap;

use crate::graph::{Edge, Graph, VertexId};

struct LowLink {
    clock: usize,
    // Discovery order of each visited vertex.
    ord: HashMap<VertexId, usize>,
    // Smallest discovery order reachable from the vertex's subtree via at
    // most one back edge.
    low: HashMap<VertexId, usize>,
}

/// Find all bridges: edges whose removal increases the number of connected
/// components.
///
/// Runs a low-link DFS. After returning from a child `w` of `v`, the edge
/// `(v, w)` is a bridge exactly when `low[w] > ord[v]`, meaning nothing in
/// the subtree under `w` reaches back above it.
///
/// **Panics** on directed graphs; they are not supported.
///
/// ```
/// use simplegraph::Graph;
/// use simplegraph::algo::bridges;
///
/// // 0 - 1 - 2 with the cycle 2 - 3 - 4 - 2
/// let mut g = Graph::new_undirected();
/// let ids: Vec<_> = (0..5).map(|_| g.add_vertex(())).collect();
/// g.add_edge(ids[0], ids[1], 0).unwrap();
/// g.add_edge(ids[1], ids[2], 0).unwrap();
/// g.add_edge(ids[2], ids[3], 0).unwrap();
/// g.add_edge(ids[3], ids[4], 0).unwrap();
/// g.add_edge(ids[4], ids[2], 0).unwrap();
///
/// let found = bridges(&g);
/// assert_eq!(found.len(), 2);
/// ```
pub fn bridges<N>(graph: &Graph<N>) -> Vec<Edge> {
    assert!(
        !graph.is_directed(),
        "bridges: directed graphs are not supported"
    );
    let mut state = LowLink {
        clock: 0,
        ord: HashMap::new(),
        low: HashMap::new(),
    };
    let mut result = Vec::new();
    for vertex in graph.vertices() {
        if !state.ord.contains_key(&vertex) {
            bridge_dfs(graph, &mut state, vertex, vertex, &mut result);
        }
    }
    result
}

fn bridge_dfs<N>(
    graph: &Graph<N>,
    state: &mut LowLink,
    vertex: VertexId,
    parent: VertexId,
    result: &mut Vec<Edge>,
) {
    state.ord.insert(vertex, state.clock);
    state.low.insert(vertex, state.clock);
    state.clock += 1;

    for edge in graph.edges(vertex) {
        let succ = edge.target();
        if !state.ord.contains_key(&succ) {
            bridge_dfs(graph, state, succ, vertex, result);
            let succ_low = state.low[&succ];
            if succ_low < state.low[&vertex] {
                state.low.insert(vertex, succ_low);
            }
            if succ_low > state.ord[&vertex] {
                result.push(edge);
            }
        } else if succ != parent {
            // Back edge: the cycle it closes protects the tree edge.
            let succ_low = state.low[&succ];
            if succ_low < state.low[&vertex] {
                state.low.insert(vertex, succ_low);
            }
        }
    }
}
