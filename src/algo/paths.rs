//! Single-source paths and reachability.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::graph::{Graph, VertexId};

/// The traversal order used to grow a single-source path tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth-first: in an unweighted graph the tree holds shortest-hop
    /// paths.
    Bfs,
    /// Depth-first: some path tree, with no length guarantee.
    Dfs,
}

/// Build a parent map rooted at `source`: every reached vertex maps to its
/// predecessor in the traversal tree and the source maps to itself.
///
/// Returns `None` when `source` is not in the graph. Feed the map to
/// [`path_to`] to extract individual paths.
pub fn single_source_path<N>(
    graph: &Graph<N>,
    source: VertexId,
    order: Order,
) -> Option<HashMap<VertexId, VertexId>> {
    if !graph.has_vertex(source) {
        return None;
    }
    let mut parents = HashMap::new();
    match order {
        Order::Dfs => dfs_parents(graph, &mut parents, source, source),
        Order::Bfs => bfs_parents(graph, &mut parents, source),
    }
    Some(parents)
}

fn dfs_parents<N>(
    graph: &Graph<N>,
    parents: &mut HashMap<VertexId, VertexId>,
    vertex: VertexId,
    parent: VertexId,
) {
    parents.insert(vertex, parent);
    for succ in graph.neighbors(vertex) {
        if !parents.contains_key(&succ) {
            dfs_parents(graph, parents, succ, vertex);
        }
    }
}

fn bfs_parents<N>(graph: &Graph<N>, parents: &mut HashMap<VertexId, VertexId>, source: VertexId) {
    parents.insert(source, source);
    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(vertex) = queue.pop_front() {
        for succ in graph.neighbors(vertex) {
            if !parents.contains_key(&succ) {
                parents.insert(succ, vertex);
                queue.push_back(succ);
            }
        }
    }
}

/// Extract the path ending at `to` from a parent map produced by
/// [`single_source_path`].
///
/// The sequence starts at the first hop after the source and ends at `to`;
/// it is empty when `to` is the source itself or was never reached.
pub fn path_to(parents: &HashMap<VertexId, VertexId>, to: VertexId) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = to;
    while let Some(&parent) = parents.get(&current) {
        if parent == current {
            break;
        }
        path.push(current);
        current = parent;
    }
    path.reverse();
    path
}

/// Whether any path leads from `source` to `target`.
///
/// `false` when either vertex is unknown, and also when `source == target`.
pub fn has_path<N>(graph: &Graph<N>, source: VertexId, target: VertexId) -> bool {
    if !graph.has_vertex(source) || !graph.has_vertex(target) || source == target {
        return false;
    }
    let mut parents = HashMap::new();
    dfs_find(graph, &mut parents, source, source, target)
}

/// Some path from `source` to `target`, not necessarily a shortest one.
///
/// The returned sequence has the same source-exclusive shape as
/// [`path_to`]. `None` when no path exists (or `source == target`).
pub fn one_path<N>(graph: &Graph<N>, source: VertexId, target: VertexId) -> Option<Vec<VertexId>> {
    if !graph.has_vertex(source) || !graph.has_vertex(target) || source == target {
        return None;
    }
    let mut parents = HashMap::new();
    if !dfs_find(graph, &mut parents, source, source, target) {
        return None;
    }
    Some(path_to(&parents, target))
}

fn dfs_find<N>(
    graph: &Graph<N>,
    parents: &mut HashMap<VertexId, VertexId>,
    vertex: VertexId,
    parent: VertexId,
    target: VertexId,
) -> bool {
    parents.insert(vertex, parent);
    if vertex == target {
        return true;
    }
    for succ in graph.neighbors(vertex) {
        if !parents.contains_key(&succ) && dfs_find(graph, parents, succ, vertex, target) {
            return true;
        }
    }
    false
}
