//! Randomized cross-checks between independent algorithms.

use proptest::prelude::*;

use simplegraph::algo::{
    bellman_ford, dijkstra, floyd_warshall, kruskal, path_to, prim, single_source_path, toposort,
    Order,
};
use simplegraph::{Edge, Graph, VertexId};

const VERTICES: u32 = 8;

fn arb_edges(max_weight: i64) -> impl Strategy<Value = Vec<(u32, u32, i64)>> {
    proptest::collection::vec(
        (0..VERTICES, 0..VERTICES, 1..=max_weight),
        0..(VERTICES as usize * 3),
    )
}

fn build(directed: bool, edges: &[(u32, u32, i64)]) -> Graph<()> {
    let mut g = Graph::new(directed, true);
    for _ in 0..VERTICES {
        g.add_vertex(());
    }
    for &(a, b, w) in edges {
        if a != b {
            g.add_edge(a, b, w).unwrap();
        }
    }
    g
}

// A random graph made connected by chaining all vertices first.
fn build_connected(edges: &[(u32, u32, i64)]) -> Graph<()> {
    let mut g = Graph::new_undirected_weighted();
    for _ in 0..VERTICES {
        g.add_vertex(());
    }
    for v in 1..VERTICES {
        g.add_edge(v - 1, v, 10).unwrap();
    }
    for &(a, b, w) in edges {
        if a != b {
            g.add_edge(a, b, w).unwrap();
        }
    }
    g
}

proptest! {
    #[test]
    fn dijkstra_agrees_with_bellman_ford(edges in arb_edges(20)) {
        let g = build(true, &edges);
        let by_dijkstra = dijkstra(&g, 0);
        let by_bellman_ford =
            bellman_ford(&g, 0).expect("no negative weights, no negative cycle");
        prop_assert_eq!(by_dijkstra, by_bellman_ford);
    }

    #[test]
    fn floyd_warshall_agrees_with_dijkstra(edges in arb_edges(20)) {
        let g = build(true, &edges);
        let all_pairs = floyd_warshall(&g).expect("no negative weights");
        for source in 0..VERTICES {
            prop_assert_eq!(&all_pairs[&source], &dijkstra(&g, source));
        }
    }

    #[test]
    fn kruskal_and_prim_agree_on_total_weight(edges in arb_edges(50)) {
        let g = build_connected(&edges);
        let by_kruskal = kruskal(&g).expect("graph is connected by construction");
        let by_prim = prim(&g).expect("graph is connected by construction");
        prop_assert_eq!(by_kruskal.len(), g.vertex_count() - 1);
        prop_assert_eq!(by_prim.len(), g.vertex_count() - 1);
        let weight = |tree: &[Edge]| tree.iter().map(Edge::weight).sum::<i64>();
        prop_assert_eq!(weight(&by_kruskal), weight(&by_prim));
    }

    #[test]
    fn bfs_hop_counts_match_unit_weight_dijkstra(edges in arb_edges(1)) {
        let mut unweighted = Graph::new_undirected();
        let mut unit = Graph::new_undirected_weighted();
        for _ in 0..VERTICES {
            unweighted.add_vertex(());
            unit.add_vertex(());
        }
        for &(a, b, _) in &edges {
            if a != b {
                unweighted.add_edge(a, b, 0).unwrap();
                unit.add_edge(a, b, 1).unwrap();
            }
        }
        let parents = single_source_path(&unweighted, 0, Order::Bfs).unwrap();
        let hops = dijkstra(&unit, 0);
        for (vertex, &distance) in &hops {
            prop_assert_eq!(path_to(&parents, *vertex).len() as i64, distance);
        }
        for vertex in 1..VERTICES {
            if !hops.contains_key(&vertex) {
                prop_assert!(path_to(&parents, vertex).is_empty());
            }
        }
    }

    #[test]
    fn toposort_is_a_linear_extension(edges in arb_edges(1)) {
        // Orienting every edge upward guarantees acyclicity.
        let mut g = Graph::new_directed();
        for _ in 0..VERTICES {
            g.add_vertex(());
        }
        for &(a, b, _) in &edges {
            if a < b {
                g.add_edge(a, b, 0).unwrap();
            }
        }
        let order = toposort(&g).expect("edges all point upward");
        prop_assert_eq!(order.len(), g.vertex_count());
        let position = |v: VertexId| order.iter().position(|&x| x == v).unwrap();
        for edge in g.all_edges() {
            prop_assert!(position(edge.source()) < position(edge.target()));
        }
    }

    #[test]
    fn degree_sums_survive_random_removals(
        edges in arb_edges(5),
        removals in proptest::collection::vec(0..VERTICES, 0..4),
    ) {
        let mut g = build(true, &edges);
        for vertex in removals {
            g.remove_vertex(vertex);
        }
        let in_sum: usize = g.vertices().map(|v| g.in_degree_of(v)).sum();
        let out_sum: usize = g.vertices().map(|v| g.out_degree_of(v)).sum();
        prop_assert_eq!(in_sum, g.edge_count());
        prop_assert_eq!(out_sum, g.edge_count());
        // Mirror-consistency of what is left.
        for edge in g.all_edges() {
            prop_assert!(g.has_vertex(edge.source()) && g.has_vertex(edge.target()));
        }
    }
}
