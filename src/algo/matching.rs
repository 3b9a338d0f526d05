//! Maximum matching in bipartite graphs.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::algo::cycles::two_color;
use crate::algo::maximum_flow::max_flow;
use crate::algo::track_path;
use crate::graph::{Graph, VertexId};

/// Size of a maximum matching, computed by reduction to maximum flow.
///
/// The graph is 2-colored, then rebuilt as a directed unit-capacity
/// network: a super-source feeds every color-0 vertex, every color-0 vertex
/// feeds its color-1 neighbors, and every color-1 vertex drains into a
/// super-sink. The max-flow value is the matching cardinality.
///
/// **Panics** unless the graph is undirected and bipartite.
pub fn bipartite_matching<N>(graph: &Graph<N>) -> usize {
    assert!(
        !graph.is_directed(),
        "bipartite_matching requires an undirected graph"
    );
    let colors = two_color(graph).expect("bipartite_matching: graph is not bipartite");
    if graph.edge_count() == 0 {
        return 0;
    }

    let mut network = Graph::new_directed_weighted();
    for vertex in graph.vertices() {
        network
            .add_vertex_with_id(vertex, ())
            .expect("fresh graph has no id collisions");
    }
    let source = network.add_vertex(());
    let sink = network.add_vertex(());

    for edge in graph.all_edges() {
        // One orientation per logical edge, from color 0 toward color 1.
        if edge.source() < edge.target() {
            let (zero, one) = if colors[&edge.source()] == 0 {
                (edge.source(), edge.target())
            } else {
                (edge.target(), edge.source())
            };
            network
                .add_edge(zero, one, 1)
                .expect("both endpoints were copied");
            network
                .add_edge(source, zero, 1)
                .expect("network vertices exist");
            network
                .add_edge(one, sink, 1)
                .expect("network vertices exist");
        }
    }
    max_flow(&network, source, sink).value as usize
}

/// Size of a maximum matching, computed with the BFS-based Hungarian
/// augmenting-path method.
///
/// For each unmatched color-0 vertex a BFS looks for an alternating path
/// ending in a free color-1 vertex; finding one flips the matching along
/// the path and grows the matching by one.
///
/// **Panics** unless the graph is undirected and bipartite.
pub fn hungarian_matching<N>(graph: &Graph<N>) -> usize {
    assert!(
        !graph.is_directed(),
        "hungarian_matching requires an undirected graph"
    );
    let colors = two_color(graph).expect("hungarian_matching: graph is not bipartite");

    let mut matching: HashMap<VertexId, VertexId> = HashMap::new();
    let mut matched_pairs = 0;
    for vertex in graph.vertices() {
        if colors[&vertex] == 0
            && !matching.contains_key(&vertex)
            && augment(graph, &mut matching, vertex)
        {
            matched_pairs += 1;
        }
    }
    matched_pairs
}

// Alternating BFS from an unmatched color-0 vertex. Matched color-1
// vertices are crossed only along their matching edge; reaching a free
// color-1 vertex flips the matching along the traced path.
fn augment<N>(
    graph: &Graph<N>,
    matching: &mut HashMap<VertexId, VertexId>,
    root: VertexId,
) -> bool {
    let mut parents = HashMap::new();
    parents.insert(root, root);
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(vertex) = queue.pop_front() {
        for succ in graph.neighbors(vertex) {
            if parents.contains_key(&succ) {
                continue;
            }
            match matching.get(&succ).copied() {
                Some(partner) => {
                    parents.insert(succ, vertex);
                    if !parents.contains_key(&partner) {
                        parents.insert(partner, succ);
                        queue.push_back(partner);
                    }
                }
                None => {
                    parents.insert(succ, vertex);
                    let path = track_path(&parents, succ, root);
                    for pair in path.chunks(2) {
                        matching.insert(pair[0], pair[1]);
                        matching.insert(pair[1], pair[0]);
                    }
                    return true;
                }
            }
        }
    }
    false
}
