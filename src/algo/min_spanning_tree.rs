//! Minimum spanning tree algorithms.

use std::collections::BinaryHeap;

use crate::algo::components::component_count;
use crate::graph::{Edge, Graph, VertexId};
use crate::scored::MinScored;
use crate::unionfind::UnionFind;

/// Compute a minimum spanning tree with Kruskal's algorithm, in
/// O(|E| log |E|).
///
/// The logical edge list (each undirected edge taken once) is sorted by
/// ascending weight; an edge is accepted when its endpoints still lie in
/// different sets of a union-find over the vertices. Returns the accepted
/// edges, owned by the caller, or `None` when the graph is not connected.
/// The empty graph yields an empty tree.
///
/// **Panics** unless the graph is undirected and weighted.
///
/// See also [`prim`]: both produce trees of equal total weight, though not
/// necessarily the same edge set.
pub fn kruskal<N>(graph: &Graph<N>) -> Option<Vec<Edge>> {
    assert!(!graph.is_directed(), "kruskal requires an undirected graph");
    assert!(graph.is_weighted(), "kruskal requires a weighted graph");
    if component_count(graph) > 1 {
        return None;
    }

    // One record per logical edge.
    let mut edges: Vec<Edge> = graph
        .all_edges()
        .filter(|edge| edge.source() < edge.target())
        .collect();
    edges.sort_by_key(Edge::weight);

    let mut subtrees = UnionFind::new(graph.vertex_count());
    let mut tree = Vec::new();
    for edge in edges {
        let source = graph.to_index(edge.source());
        let target = graph.to_index(edge.target());
        if subtrees.union(source, target) {
            tree.push(edge);
        }
    }
    Some(tree)
}

/// Compute a minimum spanning tree with Prim's algorithm, in
/// O(|E| log |E|).
///
/// Starting from an arbitrary vertex, a min-heap holds candidate edges
/// keyed by weight; the cheapest edge leading out of the tree is accepted
/// and the fresh endpoint's edges join the heap. Returns `None` when the
/// graph is not connected; the empty graph yields an empty tree.
///
/// **Panics** unless the graph is undirected and weighted.
pub fn prim<N>(graph: &Graph<N>) -> Option<Vec<Edge>> {
    assert!(!graph.is_directed(), "prim requires an undirected graph");
    assert!(graph.is_weighted(), "prim requires a weighted graph");
    if component_count(graph) > 1 {
        return None;
    }
    let start = match graph.vertices().next() {
        Some(vertex) => vertex,
        None => return Some(Vec::new()),
    };

    let mut in_tree = graph.visit_map();
    in_tree.insert(graph.to_index(start));
    let mut candidates: BinaryHeap<MinScored<i64, Edge>> = BinaryHeap::new();
    for edge in graph.edges(start) {
        candidates.push(MinScored(edge.weight(), edge));
    }

    let mut tree = Vec::new();
    while let Some(MinScored(_, edge)) = candidates.pop() {
        let source_seen = in_tree.contains(graph.to_index(edge.source()));
        let target_seen = in_tree.contains(graph.to_index(edge.target()));
        if source_seen && target_seen {
            continue;
        }
        tree.push(edge);
        let fresh: VertexId = if source_seen {
            edge.target()
        } else {
            edge.source()
        };
        in_tree.insert(graph.to_index(fresh));
        for next in graph.edges(fresh) {
            if !in_tree.contains(graph.to_index(next.target())) {
                candidates.push(MinScored(next.weight(), next));
            }
        }
    }
    Some(tree)
}
