//! Strongly connected components.

use hashbrown::HashMap;

use crate::algo::components::{group_labels, label_components};
use crate::algo::traversal::dfs_post_order;
use crate::graph::{Graph, VertexId};

/// Compute the strongly connected components of a directed graph with
/// Kosaraju's two-pass algorithm.
///
/// Pass one walks the reversed graph and records the DFS post-order; pass
/// two labels components on the original graph, starting a fresh component
/// at each unvisited vertex taken in reverse post-order. Component ids are
/// dense from 0; members are listed in visit order.
///
/// **Panics** on undirected graphs.
///
/// ```
/// use simplegraph::Graph;
/// use simplegraph::algo::kosaraju_scc;
///
/// let mut g = Graph::new_directed();
/// let ids: Vec<_> = (0..3).map(|_| g.add_vertex(())).collect();
/// g.add_edge(ids[0], ids[1], 0).unwrap();
/// g.add_edge(ids[1], ids[0], 0).unwrap();
/// g.add_edge(ids[1], ids[2], 0).unwrap();
///
/// let scc = kosaraju_scc(&g);
/// assert_eq!(scc.len(), 2);
/// ```
pub fn kosaraju_scc<N>(graph: &Graph<N>) -> HashMap<usize, Vec<VertexId>>
where
    N: Clone,
{
    assert!(
        graph.is_directed(),
        "kosaraju_scc requires a directed graph"
    );
    let reversed = graph.reversed();
    let order = dfs_post_order(&reversed);
    group_labels(label_components(graph, order.into_iter().rev()))
}
