//! Bellman-Ford shortest paths with negative edge support.

use hashbrown::HashMap;

use crate::algo::track_path;
use crate::graph::{Graph, VertexId};

/// Compute shortest distances from `source`, allowing negative edge
/// weights, in O(|V| * |E|).
///
/// Runs |V| − 1 rounds of relaxation over every edge; a final round that
/// still finds an improvement proves a negative-weight cycle reachable from
/// the source, in which case `None` is returned. Only reached vertices
/// appear in the map.
///
/// **Panics** unless the graph is weighted and `source` exists.
pub fn bellman_ford<N>(graph: &Graph<N>, source: VertexId) -> Option<HashMap<VertexId, i64>> {
    assert!(
        graph.is_weighted(),
        "bellman_ford requires a weighted graph"
    );
    assert!(graph.has_vertex(source), "bellman_ford: unknown source vertex");
    relax_rounds(graph, source, None)
}

/// Shortest path from `source` to `target` under Bellman-Ford, as a vertex
/// sequence including both endpoints.
///
/// `None` when the graph holds a reachable negative cycle or `target`
/// cannot be reached.
///
/// **Panics** unless the graph is weighted, both vertices exist and
/// `source != target`.
pub fn bellman_ford_path<N>(
    graph: &Graph<N>,
    source: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    assert!(
        graph.is_weighted(),
        "bellman_ford requires a weighted graph"
    );
    assert!(graph.has_vertex(source), "bellman_ford: unknown source vertex");
    assert!(graph.has_vertex(target), "bellman_ford: unknown target vertex");
    assert!(
        source != target,
        "bellman_ford_path: source and target must differ"
    );
    let mut predecessors = HashMap::new();
    predecessors.insert(source, source);
    relax_rounds(graph, source, Some(&mut predecessors))?;
    if !predecessors.contains_key(&target) {
        return None;
    }
    Some(track_path(&predecessors, target, source))
}

fn relax_rounds<N>(
    graph: &Graph<N>,
    source: VertexId,
    mut predecessors: Option<&mut HashMap<VertexId, VertexId>>,
) -> Option<HashMap<VertexId, i64>> {
    let mut distances = HashMap::new();
    distances.insert(source, 0);

    for _ in 1..graph.vertex_count() {
        for vertex in graph.vertices() {
            let Some(&distance) = distances.get(&vertex) else {
                continue;
            };
            for edge in graph.edges(vertex) {
                let succ = edge.target();
                let candidate = distance + edge.weight();
                let improved = match distances.get(&succ) {
                    None => true,
                    Some(&known) => candidate < known,
                };
                if improved {
                    distances.insert(succ, candidate);
                    if let Some(predecessors) = predecessors.as_deref_mut() {
                        predecessors.insert(succ, vertex);
                    }
                }
            }
        }
    }

    // One more sweep: any further improvement can only come from a
    // negative cycle.
    for vertex in graph.vertices() {
        let Some(&distance) = distances.get(&vertex) else {
            continue;
        };
        for edge in graph.edges(vertex) {
            match distances.get(&edge.target()) {
                Some(&known) if distance + edge.weight() < known => return None,
                _ => {}
            }
        }
    }
    Some(distances)
}
