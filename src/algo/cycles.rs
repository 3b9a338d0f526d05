//! Cycle detection, cycle enumeration and the bipartiteness test.

use hashbrown::{HashMap, HashSet};

use crate::algo::track_path;
use crate::graph::{Graph, VertexId};

/// Whether the graph contains a cycle.
///
/// For undirected graphs a DFS flags any edge back to a visited vertex
/// other than the immediate parent; for directed graphs the back edge must
/// land on a vertex of the current recursion stack.
pub fn has_cycle<N>(graph: &Graph<N>) -> bool {
    if graph.is_directed() {
        let mut visited = HashSet::new();
        let mut on_stack = HashSet::new();
        for vertex in graph.vertices() {
            if !visited.contains(&vertex)
                && directed_cycle_dfs(graph, &mut visited, &mut on_stack, vertex)
            {
                return true;
            }
        }
        false
    } else {
        let mut visited = HashSet::new();
        for vertex in graph.vertices() {
            if !visited.contains(&vertex)
                && undirected_cycle_dfs(graph, &mut visited, vertex, vertex)
            {
                return true;
            }
        }
        false
    }
}

fn undirected_cycle_dfs<N>(
    graph: &Graph<N>,
    visited: &mut HashSet<VertexId>,
    vertex: VertexId,
    parent: VertexId,
) -> bool {
    visited.insert(vertex);
    for succ in graph.neighbors(vertex) {
        if visited.contains(&succ) {
            if succ != parent {
                return true;
            }
        } else if undirected_cycle_dfs(graph, visited, succ, vertex) {
            return true;
        }
    }
    false
}

fn directed_cycle_dfs<N>(
    graph: &Graph<N>,
    visited: &mut HashSet<VertexId>,
    on_stack: &mut HashSet<VertexId>,
    vertex: VertexId,
) -> bool {
    visited.insert(vertex);
    on_stack.insert(vertex);
    for succ in graph.neighbors(vertex) {
        if !visited.contains(&succ) {
            if directed_cycle_dfs(graph, visited, on_stack, succ) {
                return true;
            }
        } else if on_stack.contains(&succ) {
            return true;
        }
    }
    on_stack.remove(&vertex);
    false
}

/// Enumerate one cycle per back edge found during a DFS sweep.
///
/// Each cycle is a vertex sequence that closes on its repeating vertex, e.g.
/// `[1, 2, 3, 1]`. Every vertex is expanded once; a denser graph can contain
/// further cycles that share no back edge with the reported ones.
pub fn cycles<N>(graph: &Graph<N>) -> Vec<Vec<VertexId>> {
    let mut result = Vec::new();
    let mut visited = HashSet::new();
    let mut on_path = HashMap::new();
    for vertex in graph.vertices() {
        if !visited.contains(&vertex) {
            if graph.is_directed() {
                directed_cycle_paths(graph, &mut visited, &mut on_path, vertex, vertex, &mut result);
            } else {
                undirected_cycle_paths(
                    graph,
                    &mut visited,
                    &mut on_path,
                    vertex,
                    vertex,
                    &mut result,
                );
            }
        }
    }
    result
}

fn undirected_cycle_paths<N>(
    graph: &Graph<N>,
    visited: &mut HashSet<VertexId>,
    on_path: &mut HashMap<VertexId, VertexId>,
    vertex: VertexId,
    parent: VertexId,
    result: &mut Vec<Vec<VertexId>>,
) {
    visited.insert(vertex);
    on_path.insert(vertex, parent);
    for succ in graph.neighbors(vertex) {
        if on_path.contains_key(&succ) {
            // A back edge to anything but the immediate parent closes a
            // cycle along the current path.
            if succ != parent {
                let mut cycle = track_path(on_path, vertex, succ);
                cycle.push(succ);
                result.push(cycle);
            }
        } else if !visited.contains(&succ) {
            undirected_cycle_paths(graph, visited, on_path, succ, vertex, result);
        }
    }
    on_path.remove(&vertex);
}

fn directed_cycle_paths<N>(
    graph: &Graph<N>,
    visited: &mut HashSet<VertexId>,
    on_path: &mut HashMap<VertexId, VertexId>,
    vertex: VertexId,
    parent: VertexId,
    result: &mut Vec<Vec<VertexId>>,
) {
    visited.insert(vertex);
    on_path.insert(vertex, parent);
    for succ in graph.neighbors(vertex) {
        if on_path.contains_key(&succ) {
            let mut cycle = track_path(on_path, vertex, succ);
            cycle.push(succ);
            result.push(cycle);
        } else if !visited.contains(&succ) {
            directed_cycle_paths(graph, visited, on_path, succ, vertex, result);
        }
    }
    on_path.remove(&vertex);
}

/// Whether the graph is 2-colorable.
///
/// **Panics** on directed graphs.
pub fn is_bipartite<N>(graph: &Graph<N>) -> bool {
    assert!(
        !graph.is_directed(),
        "is_bipartite requires an undirected graph"
    );
    two_color(graph).is_some()
}

/// 2-color the graph with a DFS, or `None` if some edge joins two vertices
/// of equal color.
pub(crate) fn two_color<N>(graph: &Graph<N>) -> Option<HashMap<VertexId, u8>> {
    let mut colors = HashMap::new();
    for vertex in graph.vertices() {
        if !colors.contains_key(&vertex) && !color_dfs(graph, &mut colors, vertex, 0) {
            return None;
        }
    }
    Some(colors)
}

fn color_dfs<N>(
    graph: &Graph<N>,
    colors: &mut HashMap<VertexId, u8>,
    vertex: VertexId,
    color: u8,
) -> bool {
    colors.insert(vertex, color);
    for succ in graph.neighbors(vertex) {
        match colors.get(&succ) {
            None => {
                if !color_dfs(graph, colors, succ, 1 - color) {
                    return false;
                }
            }
            Some(&seen) if seen == color => return false,
            Some(_) => {}
        }
    }
    true
}
