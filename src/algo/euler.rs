//! Eulerian circuits: existence test and Hierholzer's construction.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};

use crate::algo::components::component_count;
use crate::graph::{Graph, VertexId};
use crate::unionfind::UnionFind;

/// Whether the graph has an Eulerian circuit, a closed walk using every
/// edge exactly once.
///
/// Undirected: the graph forms a single component and every vertex has even
/// degree greater than zero. Directed: every vertex has equal, non-zero in-
/// and out-degree and the vertices are weakly connected. A graph without
/// vertices has no circuit.
pub fn has_euler_circuit<N>(graph: &Graph<N>) -> bool {
    if graph.vertex_count() == 0 {
        return false;
    }
    if graph.is_directed() {
        for vertex in graph.vertices() {
            let in_degree = graph.in_degree_of(vertex);
            if in_degree == 0 || in_degree != graph.out_degree_of(vertex) {
                return false;
            }
        }
        // Degrees alone allow two disjoint cycles; they must share one
        // weakly connected block.
        weakly_connected(graph)
    } else {
        if component_count(graph) > 1 {
            return false;
        }
        for vertex in graph.vertices() {
            let degree = graph.degree_of(vertex);
            if degree == 0 || degree % 2 == 1 {
                return false;
            }
        }
        true
    }
}

fn weakly_connected<N>(graph: &Graph<N>) -> bool {
    let mut sets = UnionFind::new(graph.vertex_count());
    for edge in graph.all_edges() {
        sets.union(
            graph.to_index(edge.source()),
            graph.to_index(edge.target()),
        );
    }
    let root = sets.find(0);
    (1..graph.vertex_count()).all(|index| sets.find(index) == root)
}

/// Construct an Eulerian circuit with Hierholzer's algorithm, as a vertex
/// sequence whose first and last entries coincide. Returns `None` when
/// [`has_euler_circuit`] is `false`.
///
/// Works on a throwaway copy of the adjacency sets: while the stack is
/// non-empty, a vertex with unused outgoing edges consumes one and walks
/// on; a vertex without any is prepended to the circuit.
pub fn eulerian_circuit<N>(graph: &Graph<N>) -> Option<Vec<VertexId>> {
    if !has_euler_circuit(graph) {
        return None;
    }
    let mut remaining: IndexMap<VertexId, IndexSet<VertexId>> = graph
        .vertices()
        .map(|vertex| (vertex, graph.neighbors(vertex).collect()))
        .collect();

    let start = graph.vertices().next()?;
    let mut circuit = VecDeque::new();
    let mut stack = vec![start];
    let mut current = start;
    while !stack.is_empty() {
        let next = remaining
            .get(&current)
            .and_then(|unused| unused.first().copied());
        match next {
            Some(target) => {
                stack.push(current);
                remaining
                    .get_mut(&current)
                    .expect("entry exists for every vertex")
                    .shift_remove(&target);
                if !graph.is_directed() {
                    remaining
                        .get_mut(&target)
                        .expect("entry exists for every vertex")
                        .shift_remove(&current);
                }
                current = target;
            }
            None => {
                circuit.push_front(current);
                current = stack.pop().expect("loop guard: stack is non-empty");
            }
        }
    }
    Some(circuit.into_iter().collect())
}
