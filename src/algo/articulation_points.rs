//! Find all articulation points in an undirected graph.

use hashbrown::HashMap;
use indexmap::IndexSet;

use crate::graph::{Graph, VertexId};

struct LowLink {
    clock: usize,
    ord: HashMap<VertexId, usize>,
    low: HashMap<VertexId, usize>,
}

/// Find all articulation points (cut vertices): vertices whose removal
/// increases the number of connected components.
///
/// Same low-link DFS as [`bridges`](crate::algo::bridges), with the root of
/// each DFS tree treated specially: the root is a cut vertex exactly when
/// it has more than one DFS child, a non-root `v` when some child `w`
/// satisfies `low[w] >= ord[v]`. Each qualifying vertex is reported once,
/// in discovery order.
///
/// **Panics** on directed graphs; they are not supported.
pub fn articulation_points<N>(graph: &Graph<N>) -> Vec<VertexId> {
    assert!(
        !graph.is_directed(),
        "articulation_points: directed graphs are not supported"
    );
    let mut state = LowLink {
        clock: 0,
        ord: HashMap::new(),
        low: HashMap::new(),
    };
    let mut result = IndexSet::new();
    for vertex in graph.vertices() {
        if !state.ord.contains_key(&vertex) {
            cut_point_dfs(graph, &mut state, vertex, vertex, &mut result);
        }
    }
    result.into_iter().collect()
}

fn cut_point_dfs<N>(
    graph: &Graph<N>,
    state: &mut LowLink,
    vertex: VertexId,
    parent: VertexId,
    result: &mut IndexSet<VertexId>,
) {
    state.ord.insert(vertex, state.clock);
    state.low.insert(vertex, state.clock);
    state.clock += 1;

    let is_root = vertex == parent;
    let mut children = 0;
    for succ in graph.neighbors(vertex) {
        if !state.ord.contains_key(&succ) {
            cut_point_dfs(graph, state, succ, vertex, result);
            let succ_low = state.low[&succ];
            if succ_low < state.low[&vertex] {
                state.low.insert(vertex, succ_low);
            }
            if !is_root && succ_low >= state.ord[&vertex] {
                result.insert(vertex);
            }
            children += 1;
            if is_root && children > 1 {
                result.insert(vertex);
            }
        } else if succ != parent {
            let succ_low = state.low[&succ];
            if succ_low < state.low[&vertex] {
                state.low.insert(vertex, succ_low);
            }
        }
    }
}
