//! Hamiltonian paths and circuits by backtracking search.

use hashbrown::HashMap;

use crate::algo::track_path;
use crate::graph::{Graph, VertexId};

/// Find a Hamiltonian path starting at `start`: a path visiting every
/// vertex exactly once. Returns the vertex sequence from `start` to the
/// path's end, or `None` when no such path exists.
///
/// Backtracking DFS; worst-case exponential in the number of vertices.
///
/// **Panics** unless the graph is undirected and `start` exists.
pub fn hamiltonian_path<N>(graph: &Graph<N>, start: VertexId) -> Option<Vec<VertexId>> {
    assert!(
        !graph.is_directed(),
        "hamiltonian_path requires an undirected graph"
    );
    assert!(graph.has_vertex(start), "hamiltonian_path: unknown start vertex");
    let mut visited = HashMap::new();
    let end = search(graph, &mut visited, start, start, None)?;
    Some(track_path(&visited, end, start))
}

/// Find a Hamiltonian circuit: a Hamiltonian path whose final vertex is
/// adjacent to its first. The circuit is returned as the vertex sequence of
/// the path (the closing edge back to the start is implied).
///
/// **Panics** on directed graphs.
pub fn hamiltonian_circuit<N>(graph: &Graph<N>) -> Option<Vec<VertexId>> {
    assert!(
        !graph.is_directed(),
        "hamiltonian_circuit requires an undirected graph"
    );
    let start = graph.vertices().next()?;
    let mut visited = HashMap::new();
    let end = search(graph, &mut visited, start, start, Some(start))?;
    Some(track_path(&visited, end, start))
}

// The visited map doubles as the parent record of the current attempt; a
// vertex is un-recorded when the attempt through it fails.
fn search<N>(
    graph: &Graph<N>,
    visited: &mut HashMap<VertexId, VertexId>,
    vertex: VertexId,
    parent: VertexId,
    close_to: Option<VertexId>,
) -> Option<VertexId> {
    visited.insert(vertex, parent);
    if visited.len() == graph.vertex_count() {
        match close_to {
            Some(start) if !graph.has_edge(vertex, start) => {}
            _ => return Some(vertex),
        }
    }
    for succ in graph.neighbors(vertex) {
        if !visited.contains_key(&succ) {
            if let Some(end) = search(graph, visited, succ, vertex, close_to) {
                return Some(end);
            }
        }
    }
    visited.remove(&vertex);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn assert_visits_all_once(path: &[VertexId], count: usize) {
        let mut seen = path.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), count);
        assert_eq!(path.len(), count);
    }

    #[test]
    fn square_has_a_circuit() {
        let mut g = Graph::new_undirected();
        let ids: Vec<_> = (0..4).map(|_| g.add_vertex(())).collect();
        for i in 0..4 {
            g.add_edge(ids[i], ids[(i + 1) % 4], 0).unwrap();
        }
        let circuit = hamiltonian_circuit(&g).unwrap();
        assert_visits_all_once(&circuit, 4);
        assert!(g.has_edge(*circuit.last().unwrap(), circuit[0]));
    }

    #[test]
    fn star_has_a_path_from_a_leaf_but_no_circuit() {
        // A path graph 0 - 1 - 2: Hamiltonian path from an end, no circuit.
        let mut g = Graph::new_undirected();
        let ids: Vec<_> = (0..3).map(|_| g.add_vertex(())).collect();
        g.add_edge(ids[0], ids[1], 0).unwrap();
        g.add_edge(ids[1], ids[2], 0).unwrap();

        let path = hamiltonian_path(&g, ids[0]).unwrap();
        assert_eq!(path, vec![ids[0], ids[1], ids[2]]);
        assert!(hamiltonian_circuit(&g).is_none());
    }

    #[test]
    fn middle_start_cannot_cover_a_path_graph() {
        let mut g = Graph::new_undirected();
        let ids: Vec<_> = (0..3).map(|_| g.add_vertex(())).collect();
        g.add_edge(ids[0], ids[1], 0).unwrap();
        g.add_edge(ids[1], ids[2], 0).unwrap();
        assert!(hamiltonian_path(&g, ids[1]).is_none());
    }
}
