//! Maximum flow with the Edmonds-Karp algorithm.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::graph::{Graph, VertexId};

/// The result of [`max_flow`]: the total flow value and the flow pushed
/// through every edge of the input graph.
#[derive(Clone, Debug)]
pub struct MaxFlow {
    /// Total flow from source to sink.
    pub value: i64,
    /// Flow per input edge, keyed by `(source, target)`.
    pub edge_flows: HashMap<(VertexId, VertexId), i64>,
}

/// Compute the maximum flow from `source` to `sink` with Edmonds-Karp, in
/// O(|V| * |E|^2). Edge weights are the capacities and are assumed
/// non-negative.
///
/// A residual graph is seeded with `(u -> v, w)` and `(v -> u, 0)` for each
/// input edge; BFS repeatedly finds a shortest augmenting path of positive
/// residual capacity and pushes its bottleneck capacity through. When no
/// augmenting path remains, the flow over an input edge `u -> v` is read
/// off the residual capacity of `v -> u`.
///
/// Graphs containing both `u -> v` and `v -> u` as input edges are not
/// supported: the residual records of the two edges collide.
///
/// **Panics** unless the graph is directed and weighted with at least two
/// vertices, and `source` and `sink` are distinct existing vertices.
///
/// ```
/// use simplegraph::Graph;
/// use simplegraph::algo::max_flow;
///
/// let mut g = Graph::new_directed_weighted();
/// let ids: Vec<_> = (0..4).map(|_| g.add_vertex(())).collect();
/// g.add_edge(ids[0], ids[1], 3).unwrap();
/// g.add_edge(ids[0], ids[2], 2).unwrap();
/// g.add_edge(ids[1], ids[2], 5).unwrap();
/// g.add_edge(ids[1], ids[3], 2).unwrap();
/// g.add_edge(ids[2], ids[3], 3).unwrap();
///
/// let flow = max_flow(&g, ids[0], ids[3]);
/// assert_eq!(flow.value, 5);
/// ```
pub fn max_flow<N>(graph: &Graph<N>, source: VertexId, sink: VertexId) -> MaxFlow {
    assert!(graph.is_directed(), "max_flow requires a directed graph");
    assert!(graph.is_weighted(), "max_flow requires a weighted graph");
    assert!(
        graph.vertex_count() > 1,
        "max_flow requires at least two vertices"
    );
    assert!(source != sink, "max_flow: source and sink must differ");
    assert!(graph.has_vertex(source), "max_flow: unknown source vertex");
    assert!(graph.has_vertex(sink), "max_flow: unknown sink vertex");

    let mut residual = residual_graph(graph);
    let mut value = 0;
    while let Some(path) = augmenting_path(&residual, source, sink) {
        let mut bottleneck = i64::MAX;
        for step in path.windows(2) {
            let capacity = residual
                .get_edge(step[0], step[1])
                .expect("path follows residual edges")
                .weight();
            bottleneck = bottleneck.min(capacity);
        }
        value += bottleneck;
        for step in path.windows(2) {
            let (from, to) = (step[0], step[1]);
            let forward = residual
                .get_edge(from, to)
                .expect("path follows residual edges")
                .weight();
            residual.set_weight(from, to, forward - bottleneck);
            let backward = residual
                .get_edge(to, from)
                .expect("every residual edge has a reverse record")
                .weight();
            residual.set_weight(to, from, backward + bottleneck);
        }
    }

    let mut edge_flows = HashMap::new();
    for edge in graph.all_edges() {
        let pushed = residual
            .get_edge(edge.target(), edge.source())
            .expect("every input edge has a residual reverse record")
            .weight();
        edge_flows.insert((edge.source(), edge.target()), pushed);
    }
    MaxFlow { value, edge_flows }
}

fn residual_graph<N>(graph: &Graph<N>) -> Graph<()> {
    let mut residual = Graph::new_directed_weighted();
    for vertex in graph.vertices() {
        residual
            .add_vertex_with_id(vertex, ())
            .expect("fresh graph has no id collisions");
    }
    for edge in graph.all_edges() {
        residual
            .add_edge(edge.source(), edge.target(), edge.weight())
            .expect("both endpoints were copied");
        // Reverse record carrying the flow pushed so far.
        residual
            .add_edge(edge.target(), edge.source(), 0)
            .expect("both endpoints were copied");
    }
    residual
}

// Shortest path of positive residual capacity, inclusive of both endpoints.
fn augmenting_path(residual: &Graph<()>, source: VertexId, sink: VertexId) -> Option<Vec<VertexId>> {
    let mut parents = HashMap::new();
    parents.insert(source, source);
    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(vertex) = queue.pop_front() {
        if vertex == sink {
            break;
        }
        for edge in residual.edges(vertex) {
            if edge.weight() > 0 && !parents.contains_key(&edge.target()) {
                parents.insert(edge.target(), vertex);
                queue.push_back(edge.target());
            }
        }
    }
    if !parents.contains_key(&sink) {
        return None;
    }
    let mut path = VecDeque::new();
    let mut current = sink;
    while current != source {
        path.push_front(current);
        current = parents[&current];
    }
    path.push_front(source);
    Some(path.into_iter().collect())
}
