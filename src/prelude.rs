//! Commonly used items.
//!
//! ```
//! use simplegraph::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::graph::{AddEdgeError, Edge, Graph, VertexExists, VertexId};
#[doc(no_inline)]
pub use crate::visit::{Bfs, Dfs, DfsPostOrder};
