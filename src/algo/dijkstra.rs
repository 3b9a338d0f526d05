//! Dijkstra's shortest path algorithm.

use std::collections::BinaryHeap;

use hashbrown::HashMap;

use crate::algo::track_path;
use crate::graph::{Graph, VertexId};
use crate::scored::MinScored;

/// Compute the shortest distance from `source` to every reachable vertex,
/// in O(|E| log |E|).
///
/// Uses a lazy-deletion min-heap: a vertex may sit in the heap several
/// times, and all but the first (cheapest) pop are skipped through a
/// confirmed set. Only reached vertices appear in the returned map.
///
/// Edge weights are assumed non-negative; with negative weights the result
/// is unspecified.
///
/// **Panics** unless the graph is weighted and `source` exists.
///
/// ```
/// use simplegraph::Graph;
/// use simplegraph::algo::dijkstra;
///
/// let mut g = Graph::new_directed_weighted();
/// let a = g.add_vertex(());
/// let b = g.add_vertex(());
/// let c = g.add_vertex(());
/// g.add_edge(a, b, 1).unwrap();
/// g.add_edge(b, c, 2).unwrap();
/// g.add_edge(a, c, 9).unwrap();
///
/// let dist = dijkstra(&g, a);
/// assert_eq!(dist[&c], 3);
/// ```
pub fn dijkstra<N>(graph: &Graph<N>, source: VertexId) -> HashMap<VertexId, i64> {
    shortest_distances(graph, source, None, None)
}

/// Like [`dijkstra`], additionally recording for every reached vertex the
/// predecessor through which it was last relaxed. The source has no
/// predecessor entry.
pub fn dijkstra_with_predecessors<N>(
    graph: &Graph<N>,
    source: VertexId,
) -> (HashMap<VertexId, i64>, HashMap<VertexId, VertexId>) {
    let mut predecessors = HashMap::new();
    let distances = shortest_distances(graph, source, Some(&mut predecessors), None);
    (distances, predecessors)
}

/// Shortest path from `source` to `target` as a vertex sequence including
/// both endpoints, or `None` when `target` is unreachable.
///
/// Stops as soon as the target's distance is confirmed.
///
/// **Panics** unless the graph is weighted, both vertices exist and
/// `source != target`.
pub fn dijkstra_path<N>(
    graph: &Graph<N>,
    source: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    assert!(graph.has_vertex(target), "dijkstra_path: unknown target vertex");
    assert!(
        source != target,
        "dijkstra_path: source and target must differ"
    );
    let mut predecessors = HashMap::new();
    shortest_distances(graph, source, Some(&mut predecessors), Some(target));
    if !predecessors.contains_key(&target) {
        return None;
    }
    Some(track_path(&predecessors, target, source))
}

fn shortest_distances<N>(
    graph: &Graph<N>,
    source: VertexId,
    mut predecessors: Option<&mut HashMap<VertexId, VertexId>>,
    target: Option<VertexId>,
) -> HashMap<VertexId, i64> {
    assert!(graph.is_weighted(), "dijkstra requires a weighted graph");
    assert!(graph.has_vertex(source), "dijkstra: unknown source vertex");

    let mut distances = HashMap::new();
    let mut confirmed = graph.visit_map();
    let mut heap = BinaryHeap::new();
    distances.insert(source, 0);
    heap.push(MinScored(0, source));

    while let Some(MinScored(distance, vertex)) = heap.pop() {
        if confirmed.put(graph.to_index(vertex)) {
            // Stale heap entry; this vertex is already settled.
            continue;
        }
        if target == Some(vertex) {
            break;
        }
        for edge in graph.edges(vertex) {
            let succ = edge.target();
            if confirmed.contains(graph.to_index(succ)) {
                continue;
            }
            let candidate = distance + edge.weight();
            let improved = match distances.get(&succ) {
                None => true,
                Some(&known) => candidate < known,
            };
            if improved {
                distances.insert(succ, candidate);
                heap.push(MinScored(candidate, succ));
                if let Some(predecessors) = predecessors.as_deref_mut() {
                    predecessors.insert(succ, vertex);
                }
            }
        }
    }
    distances
}
