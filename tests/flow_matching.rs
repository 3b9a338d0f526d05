use simplegraph::algo::{bipartite_matching, hungarian_matching, max_flow};
use simplegraph::Graph;

#[test]
fn max_flow_scenario() {
    // Capacities 0->1:3, 0->2:2, 1->2:5, 1->3:2, 2->3:3.
    let mut g = Graph::new_directed_weighted();
    for _ in 0..4 {
        g.add_vertex(());
    }
    for &(a, b, w) in &[(0, 1, 3), (0, 2, 2), (1, 2, 5), (1, 3, 2), (2, 3, 3)] {
        g.add_edge(a, b, w).unwrap();
    }

    let flow = max_flow(&g, 0, 3);
    assert_eq!(flow.value, 5);

    // Per-edge flows respect capacities and conservation.
    for edge in g.all_edges() {
        let pushed = flow.edge_flows[&(edge.source(), edge.target())];
        assert!(pushed >= 0 && pushed <= edge.weight());
    }
    let out_of_source: i64 = g.edges(0).map(|e| flow.edge_flows[&(0, e.target())]).sum();
    let into_sink: i64 = g
        .all_edges()
        .filter(|e| e.target() == 3)
        .map(|e| flow.edge_flows[&(e.source(), 3)])
        .sum();
    assert_eq!(out_of_source, 5);
    assert_eq!(into_sink, 5);
}

#[test]
fn wider_network_saturates_the_cut() {
    let mut g = Graph::new_directed_weighted();
    for _ in 0..6 {
        g.add_vertex(());
    }
    for &(a, b, w) in &[
        (0, 1, 10),
        (0, 2, 10),
        (1, 3, 4),
        (1, 4, 8),
        (2, 4, 9),
        (3, 5, 10),
        (4, 3, 6),
        (4, 5, 10),
    ] {
        g.add_edge(a, b, w).unwrap();
    }
    assert_eq!(max_flow(&g, 0, 5).value, 19);
}

#[test]
fn matching_scenario_grows_with_an_extra_edge() {
    // Left {0,1,2,3}, right {4,5,6,7}.
    let mut g = Graph::new_undirected();
    for _ in 0..8 {
        g.add_vertex(());
    }
    for &(a, b) in &[(0, 4), (0, 6), (1, 4), (2, 6), (3, 5), (3, 7)] {
        g.add_edge(a, b, 0).unwrap();
    }
    assert_eq!(bipartite_matching(&g), 3);
    assert_eq!(hungarian_matching(&g), 3);

    g.add_edge(1, 7, 0).unwrap();
    assert_eq!(bipartite_matching(&g), 4);
    assert_eq!(hungarian_matching(&g), 4);
}

#[test]
fn perfect_matching_on_a_cycle() {
    // An even cycle is bipartite and perfectly matchable.
    let mut g = Graph::new_undirected();
    for _ in 0..6 {
        g.add_vertex(());
    }
    for i in 0..6u32 {
        g.add_edge(i, (i + 1) % 6, 0).unwrap();
    }
    assert_eq!(bipartite_matching(&g), 3);
    assert_eq!(hungarian_matching(&g), 3);
}

#[test]
fn augmenting_paths_reroute_earlier_choices() {
    // A greedy matching of 0-2 would block 1; augmentation must fix it.
    let mut g = Graph::new_undirected();
    for _ in 0..4 {
        g.add_vertex(());
    }
    g.add_edge(0, 2, 0).unwrap();
    g.add_edge(0, 3, 0).unwrap();
    g.add_edge(1, 2, 0).unwrap();
    assert_eq!(hungarian_matching(&g), 2);
    assert_eq!(bipartite_matching(&g), 2);
}

#[test]
fn caller_chosen_ids_do_not_collide_with_flow_terminals() {
    // The matching reduction allocates its own source and sink; dense ids
    // straight after the payload vertices must not clash.
    let mut g = Graph::new_undirected();
    for id in [0, 1, 2, 3] {
        g.add_vertex_with_id(id, ()).unwrap();
    }
    g.add_edge(0, 2, 0).unwrap();
    g.add_edge(1, 3, 0).unwrap();
    assert_eq!(bipartite_matching(&g), 2);
}
