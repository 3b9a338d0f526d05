//! All-pairs shortest paths with the Floyd-Warshall algorithm.

use hashbrown::HashMap;

use crate::algo::NegativeCycle;
use crate::graph::{Graph, VertexId};

type Distances = HashMap<VertexId, HashMap<VertexId, i64>>;
type NextMatrix = HashMap<VertexId, HashMap<VertexId, VertexId>>;

/// Compute all-pairs shortest distances in O(|V|^3).
///
/// The result maps `source -> target -> distance`; a missing entry means
/// the target is unreachable from the source, and every diagonal entry is
/// 0. Negative edge weights are allowed; a cycle of negative total weight
/// makes any diagonal entry negative, which is reported as
/// [`NegativeCycle`].
///
/// **Panics** unless the graph is weighted.
pub fn floyd_warshall<N>(graph: &Graph<N>) -> Result<Distances, NegativeCycle> {
    let (distances, _) = run(graph, false)?;
    Ok(distances)
}

/// Like [`floyd_warshall`], additionally returning the `next` matrix:
/// `next[v][w]` is the first step on a shortest path from `v` toward `w`.
/// Feed it to [`floyd_path`] to reconstruct paths.
pub fn floyd_warshall_paths<N>(graph: &Graph<N>) -> Result<(Distances, NextMatrix), NegativeCycle> {
    run(graph, true)
}

/// Reconstruct the shortest path from `source` to `to` out of a `next`
/// matrix produced by [`floyd_warshall_paths`], inclusive of both
/// endpoints. `None` when no path exists.
pub fn floyd_path(next: &NextMatrix, source: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
    next.get(&source)?.get(&to)?;
    let mut path = vec![source];
    let mut current = source;
    while current != to {
        current = *next.get(&current)?.get(&to)?;
        path.push(current);
    }
    Some(path)
}

fn run<N>(graph: &Graph<N>, with_next: bool) -> Result<(Distances, NextMatrix), NegativeCycle> {
    assert!(
        graph.is_weighted(),
        "floyd_warshall requires a weighted graph"
    );
    let vertices: Vec<VertexId> = graph.vertices().collect();

    let mut distances: Distances = HashMap::new();
    let mut next: NextMatrix = HashMap::new();
    for &vertex in &vertices {
        let mut row = HashMap::new();
        row.insert(vertex, 0);
        let mut next_row = HashMap::new();
        for edge in graph.edges(vertex) {
            row.insert(edge.target(), edge.weight());
            if with_next {
                // The first step toward a direct neighbor is the neighbor.
                next_row.insert(edge.target(), edge.target());
            }
        }
        distances.insert(vertex, row);
        if with_next {
            next.insert(vertex, next_row);
        }
    }

    for &through in &vertices {
        for &from in &vertices {
            for &to in &vertices {
                let Some(&head) = distances[&from].get(&through) else {
                    continue;
                };
                let Some(&tail) = distances[&through].get(&to) else {
                    continue;
                };
                let candidate = head + tail;
                let known = distances[&from].get(&to).copied();
                if known.map_or(true, |known| candidate < known) {
                    distances
                        .get_mut(&from)
                        .expect("row exists for every vertex")
                        .insert(to, candidate);
                    if with_next {
                        let step = next[&from][&through];
                        next.get_mut(&from)
                            .expect("row exists for every vertex")
                            .insert(to, step);
                    }
                }
            }
        }
    }

    for &vertex in &vertices {
        if distances[&vertex][&vertex] < 0 {
            return Err(NegativeCycle::new());
        }
    }
    Ok((distances, next))
}
