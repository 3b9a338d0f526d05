//! Whole-graph traversal orders.
//!
//! Each function restarts its walker from every yet-unvisited vertex in
//! insertion order, so the result covers all components and contains every
//! vertex exactly once.

use crate::graph::{Graph, VertexId};
use crate::visit::{Bfs, Dfs, DfsPostOrder};

/// Visit every vertex depth-first and return the post-order: each vertex
/// appears after all vertices of its DFS subtree.
pub fn dfs_post_order<N>(graph: &Graph<N>) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut dfs = DfsPostOrder::empty(graph);
    for vertex in graph.vertices() {
        if !dfs.discovered.contains(graph.to_index(vertex)) {
            dfs.move_to(vertex);
            while let Some(visited) = dfs.next(graph) {
                order.push(visited);
            }
        }
    }
    order
}

/// Visit every vertex depth-first with an explicit stack and return the
/// pre-order: each vertex appears the moment it is popped.
///
/// The order need not coincide with the tree order of
/// [`dfs_post_order`](dfs_post_order) reversed; only the visit-once
/// guarantee is shared.
pub fn dfs<N>(graph: &Graph<N>) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut dfs = Dfs::empty(graph);
    for vertex in graph.vertices() {
        if !dfs.discovered.contains(graph.to_index(vertex)) {
            dfs.move_to(vertex);
            while let Some(visited) = dfs.next(graph) {
                order.push(visited);
            }
        }
    }
    order
}

/// Visit every vertex breadth-first and return the level order per
/// component.
pub fn bfs<N>(graph: &Graph<N>) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut bfs = Bfs::empty(graph);
    for vertex in graph.vertices() {
        if !bfs.discovered.contains(graph.to_index(vertex)) {
            bfs.move_to(graph, vertex);
            while let Some(visited) = bfs.next(graph) {
                order.push(visited);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn two_components() -> Graph<()> {
        let mut g = Graph::new_undirected();
        let ids: Vec<_> = (0..5).map(|_| g.add_vertex(())).collect();
        g.add_edge(ids[0], ids[1], 0).unwrap();
        g.add_edge(ids[1], ids[2], 0).unwrap();
        g.add_edge(ids[3], ids[4], 0).unwrap();
        g
    }

    #[test]
    fn every_order_covers_all_vertices_once() {
        let g = two_components();
        for order in [dfs_post_order(&g), dfs(&g), bfs(&g)] {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn post_order_finishes_subtrees_first() {
        let mut g = Graph::new_directed();
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        let c = g.add_vertex(());
        g.add_edge(a, b, 0).unwrap();
        g.add_edge(b, c, 0).unwrap();
        assert_eq!(dfs_post_order(&g), vec![c, b, a]);
    }
}
