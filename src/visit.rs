//! Reusable graph traversal walkers.
//!
//! The walkers own their traversal state (an explicit stack or queue plus a
//! visit map), borrow the graph only inside `next`, and can be re-aimed at
//! another start vertex with `move_to` to sweep a whole forest. None of them
//! fail; aiming one at an unknown vertex is the caller's error.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::{Graph, VertexId};

/// A depth-first traversal yielding vertices in pre-order.
///
/// ```
/// use simplegraph::{Dfs, Graph};
///
/// let mut g = Graph::new_directed();
/// let a = g.add_vertex(());
/// let b = g.add_vertex(());
/// g.add_edge(a, b, 0).unwrap();
///
/// let mut dfs = Dfs::new(&g, a);
/// let mut visited = Vec::new();
/// while let Some(v) = dfs.next(&g) {
///     visited.push(v);
/// }
/// assert_eq!(visited, vec![a, b]);
/// ```
#[derive(Clone, Debug)]
pub struct Dfs {
    /// The stack of vertices to visit.
    pub stack: Vec<VertexId>,
    /// The map of discovered vertices, indexed by dense position.
    pub discovered: FixedBitSet,
}

impl Dfs {
    /// Create a walker starting at `start`.
    pub fn new<N>(graph: &Graph<N>, start: VertexId) -> Self {
        let mut dfs = Dfs::empty(graph);
        dfs.move_to(start);
        dfs
    }

    /// Create a walker with no start vertex; use `move_to` to aim it.
    pub fn empty<N>(graph: &Graph<N>) -> Self {
        Dfs {
            stack: Vec::new(),
            discovered: graph.visit_map(),
        }
    }

    /// Keep the discovered map but restart the walk from `start`.
    pub fn move_to(&mut self, start: VertexId) {
        self.stack.clear();
        self.stack.push(start);
    }

    /// The next vertex in pre-order, if any.
    pub fn next<N>(&mut self, graph: &Graph<N>) -> Option<VertexId> {
        while let Some(vertex) = self.stack.pop() {
            if !self.discovered.put(graph.to_index(vertex)) {
                for succ in graph.neighbors(vertex) {
                    if !self.discovered.contains(graph.to_index(succ)) {
                        self.stack.push(succ);
                    }
                }
                return Some(vertex);
            }
        }
        None
    }
}

/// A depth-first traversal yielding vertices in post-order: each vertex is
/// emitted once its whole subtree has been visited.
#[derive(Clone, Debug)]
pub struct DfsPostOrder {
    /// The stack of vertices under expansion.
    pub stack: Vec<VertexId>,
    /// Vertices that have been pushed at least once.
    pub discovered: FixedBitSet,
    /// Vertices that have been emitted.
    pub finished: FixedBitSet,
}

impl DfsPostOrder {
    /// Create a walker starting at `start`.
    pub fn new<N>(graph: &Graph<N>, start: VertexId) -> Self {
        let mut dfs = DfsPostOrder::empty(graph);
        dfs.move_to(start);
        dfs
    }

    /// Create a walker with no start vertex; use `move_to` to aim it.
    pub fn empty<N>(graph: &Graph<N>) -> Self {
        DfsPostOrder {
            stack: Vec::new(),
            discovered: graph.visit_map(),
            finished: graph.visit_map(),
        }
    }

    /// Keep the discovered map but restart the walk from `start`.
    pub fn move_to(&mut self, start: VertexId) {
        self.stack.clear();
        self.stack.push(start);
    }

    /// The next vertex in post-order, if any.
    pub fn next<N>(&mut self, graph: &Graph<N>) -> Option<VertexId> {
        while let Some(&vertex) = self.stack.last() {
            if !self.discovered.put(graph.to_index(vertex)) {
                // First visit: expand the children, emit later.
                for succ in graph.neighbors(vertex) {
                    if !self.discovered.contains(graph.to_index(succ)) {
                        self.stack.push(succ);
                    }
                }
            } else {
                self.stack.pop();
                if !self.finished.put(graph.to_index(vertex)) {
                    return Some(vertex);
                }
            }
        }
        None
    }
}

/// A breadth-first traversal yielding vertices in level order.
#[derive(Clone, Debug)]
pub struct Bfs {
    /// The queue of vertices to visit.
    pub queue: VecDeque<VertexId>,
    /// The map of discovered vertices, indexed by dense position.
    pub discovered: FixedBitSet,
}

impl Bfs {
    /// Create a walker starting at `start`.
    pub fn new<N>(graph: &Graph<N>, start: VertexId) -> Self {
        let mut bfs = Bfs::empty(graph);
        bfs.move_to(graph, start);
        bfs
    }

    /// Create a walker with no start vertex; use `move_to` to aim it.
    pub fn empty<N>(graph: &Graph<N>) -> Self {
        Bfs {
            queue: VecDeque::new(),
            discovered: graph.visit_map(),
        }
    }

    /// Keep the discovered map but restart the walk from `start`.
    pub fn move_to<N>(&mut self, graph: &Graph<N>, start: VertexId) {
        self.queue.clear();
        self.discovered.insert(graph.to_index(start));
        self.queue.push_back(start);
    }

    /// The next vertex in level order, if any.
    pub fn next<N>(&mut self, graph: &Graph<N>) -> Option<VertexId> {
        let vertex = self.queue.pop_front()?;
        for succ in graph.neighbors(vertex) {
            if !self.discovered.put(graph.to_index(succ)) {
                self.queue.push_back(succ);
            }
        }
        Some(vertex)
    }
}
