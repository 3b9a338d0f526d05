//! Connected component counting and labeling.

use hashbrown::HashMap;
use indexmap::IndexMap;

use crate::graph::{Graph, VertexId};
use crate::visit::Dfs;

/// Number of connected components (directed graphs are traversed along
/// their edge directions, so this counts reachability components the same
/// way a plain DFS sweep does).
pub fn component_count<N>(graph: &Graph<N>) -> usize {
    let mut count = 0;
    let mut dfs = Dfs::empty(graph);
    for vertex in graph.vertices() {
        if !dfs.discovered.contains(graph.to_index(vertex)) {
            dfs.move_to(vertex);
            while dfs.next(graph).is_some() {}
            count += 1;
        }
    }
    count
}

/// Group the vertices by component: component ids are dense from 0 in
/// discovery order, members are listed in visit order.
pub fn components<N>(graph: &Graph<N>) -> HashMap<usize, Vec<VertexId>> {
    group_labels(label_components(graph, graph.vertices()))
}

/// Label every vertex with a component id, starting a new component at each
/// yet-unvisited root taken from `roots`. The returned map iterates in
/// visit order.
pub(crate) fn label_components<N>(
    graph: &Graph<N>,
    roots: impl IntoIterator<Item = VertexId>,
) -> IndexMap<VertexId, usize> {
    let mut labels = IndexMap::new();
    let mut dfs = Dfs::empty(graph);
    let mut next_label = 0;
    for root in roots {
        if labels.contains_key(&root) {
            continue;
        }
        dfs.move_to(root);
        while let Some(vertex) = dfs.next(graph) {
            labels.insert(vertex, next_label);
        }
        next_label += 1;
    }
    labels
}

pub(crate) fn group_labels(labels: IndexMap<VertexId, usize>) -> HashMap<usize, Vec<VertexId>> {
    let mut grouped: HashMap<usize, Vec<VertexId>> = HashMap::new();
    for (vertex, label) in labels {
        grouped.entry(label).or_default().push(vertex);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn counts_and_groups_components() {
        let mut g = Graph::new_undirected();
        let ids: Vec<_> = (0..6).map(|_| g.add_vertex(())).collect();
        g.add_edge(ids[0], ids[1], 0).unwrap();
        g.add_edge(ids[1], ids[2], 0).unwrap();
        g.add_edge(ids[3], ids[4], 0).unwrap();

        assert_eq!(component_count(&g), 3);
        let components = components(&g);
        assert_eq!(components.len(), 3);

        let mut first = components[&0].clone();
        first.sort_unstable();
        assert_eq!(first, vec![ids[0], ids[1], ids[2]]);
        let mut second = components[&1].clone();
        second.sort_unstable();
        assert_eq!(second, vec![ids[3], ids[4]]);
        assert_eq!(components[&2], vec![ids[5]]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g: Graph<()> = Graph::new_undirected();
        assert_eq!(component_count(&g), 0);
        assert!(components(&g).is_empty());
    }
}
