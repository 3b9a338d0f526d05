//! **simplegraph** is a graph data structure library.
//!
//! The central type is [`Graph`], a simple graph (no self loops, no parallel
//! edges) whose vertices are identified by non-negative integer ids and carry
//! an opaque caller payload. A graph is configured at creation as directed or
//! undirected, and weighted or unweighted; the [`algo`] module provides the
//! classic algorithm suite on top of it (traversal, connectivity, shortest
//! paths, spanning trees, flows, matchings, Eulerian and Hamiltonian walks,
//! topological sorting).
//!
//! ```
//! use simplegraph::Graph;
//! use simplegraph::algo::dijkstra;
//!
//! let mut g = Graph::new_undirected_weighted();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! let c = g.add_vertex("c");
//! g.add_edge(a, b, 7).unwrap();
//! g.add_edge(b, c, 2).unwrap();
//! g.add_edge(a, c, 12).unwrap();
//!
//! let dist = dijkstra(&g, a);
//! assert_eq!(dist[&c], 9);
//! ```

pub mod algo;
pub mod graph;
pub mod prelude;
pub mod unionfind;
pub mod visit;

mod scored;

pub use crate::graph::{AddEdgeError, Edge, Graph, VertexExists, VertexId};
pub use crate::visit::{Bfs, Dfs, DfsPostOrder};
