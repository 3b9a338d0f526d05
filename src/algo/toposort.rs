//! Topological sorting with Kahn's algorithm.

use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::graph::{Graph, VertexId};

/// Perform a topological sort of a directed graph in O(|V| + |E|).
///
/// Kahn's algorithm: vertices of in-degree 0 seed a queue; dequeuing a
/// vertex appends it to the order and decrements each out-neighbor's
/// counter, enqueuing those that reach 0. If the order stays shorter than
/// the vertex count, a cycle blocks the sort and `None` is returned.
///
/// **Panics** on undirected graphs.
///
/// ```
/// use simplegraph::Graph;
/// use simplegraph::algo::toposort;
///
/// let mut g = Graph::new_directed();
/// let a = g.add_vertex(());
/// let b = g.add_vertex(());
/// g.add_edge(a, b, 0).unwrap();
/// assert_eq!(toposort(&g), Some(vec![a, b]));
///
/// g.add_edge(b, a, 0).unwrap();
/// assert_eq!(toposort(&g), None);
/// ```
pub fn toposort<N>(graph: &Graph<N>) -> Option<Vec<VertexId>> {
    assert!(graph.is_directed(), "toposort requires a directed graph");

    let mut in_degrees: IndexMap<VertexId, usize> = graph
        .vertices()
        .map(|vertex| (vertex, graph.in_degree_of(vertex)))
        .collect();
    let mut queue: VecDeque<VertexId> = in_degrees
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(&vertex, _)| vertex)
        .collect();

    let mut order = Vec::with_capacity(graph.vertex_count());
    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for succ in graph.neighbors(vertex) {
            let degree = in_degrees
                .get_mut(&succ)
                .expect("every vertex has an in-degree entry");
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(succ);
            }
        }
    }
    if order.len() != graph.vertex_count() {
        return None;
    }
    Some(order)
}
