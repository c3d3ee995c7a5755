use std::collections::{BTreeMap, BTreeSet};

use duograph::{LabeledGraph, WeightedDigraph};
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

fn weighted_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1usize..9).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1i64..50);
        (Just(n), proptest::collection::vec(edge, 0..24))
    })
}

fn undirected_edges() -> impl Strategy<Value = (u8, Vec<(u8, u8)>)> {
    (1u8..10).prop_flat_map(|n| {
        let edge = (0..n, 0..n);
        (Just(n), proptest::collection::vec(edge, 0..20))
    })
}

/// Final edge set after replaying inserts: later weights overwrite earlier ones.
fn surviving_edges(edges: &[(usize, usize, i64)]) -> BTreeMap<(usize, usize), i64> {
    edges
        .iter()
        .filter(|(s, d, _)| s != d)
        .map(|&(s, d, w)| ((s, d), w))
        .collect()
}

fn build_weighted(n: usize, edges: &[(usize, usize, i64)]) -> WeightedDigraph<i64> {
    let mut g = WeightedDigraph::with_vertices(n);
    for &(s, d, w) in edges {
        g.add_edge(s, d, w);
    }
    g
}

fn build_petgraph_directed(n: usize, edges: &BTreeMap<(usize, usize), i64>) -> DiGraph<(), i64> {
    let mut pg = DiGraph::new();
    for _ in 0..n {
        pg.add_node(());
    }
    for (&(s, d), &w) in edges {
        pg.add_edge(NodeIndex::new(s), NodeIndex::new(d), w);
    }
    pg
}

fn build_labeled(n: u8, edges: &[(u8, u8)]) -> LabeledGraph<u8> {
    let mut g = LabeledGraph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    g.extend(edges.iter().copied());
    g
}

fn build_petgraph_undirected(n: u8, edges: &[(u8, u8)]) -> UnGraph<(), ()> {
    let pairs: BTreeSet<(u8, u8)> = edges
        .iter()
        .filter(|(a, b)| a != b)
        .map(|&(a, b)| (a.min(b), a.max(b)))
        .collect();
    let mut pg = UnGraph::new_undirected();
    for _ in 0..n {
        pg.add_node(());
    }
    for (a, b) in pairs {
        pg.add_edge(NodeIndex::new(a.into()), NodeIndex::new(b.into()), ());
    }
    pg
}

proptest! {
    #[test]
    fn dijkstra_matches_petgraph((n, edges) in weighted_edges(), src_seed in any::<usize>()) {
        let g = build_weighted(n, &edges);
        let pg = build_petgraph_directed(n, &surviving_edges(&edges));
        let src = src_seed % n;

        let expected = algo::dijkstra(&pg, NodeIndex::new(src), None, |e| *e.weight());
        let ours = g.dijkstra(src);
        prop_assert_eq!(ours.len(), n);
        for (v, dist) in ours.iter().enumerate() {
            match expected.get(&NodeIndex::new(v)) {
                Some(&d) => prop_assert_eq!(*dist, d as f64, "vertex {}", v),
                None => prop_assert!(dist.is_infinite(), "vertex {} should be unreachable", v),
            }
        }
    }

    #[test]
    fn directed_cycle_matches_petgraph((n, edges) in weighted_edges()) {
        let g = build_weighted(n, &edges);
        let pg = build_petgraph_directed(n, &surviving_edges(&edges));
        prop_assert_eq!(g.has_cycle(), algo::is_cyclic_directed(&pg));
    }

    #[test]
    fn weighted_edges_match_model((n, edges) in weighted_edges()) {
        let g = build_weighted(n, &edges);
        let model: Vec<_> = surviving_edges(&edges)
            .into_iter()
            .map(|((s, d), w)| (s, d, w))
            .collect();
        prop_assert_eq!(g.edges(), model);
    }

    #[test]
    fn weighted_traversals_visit_reachable_set((n, edges) in weighted_edges(), src_seed in any::<usize>()) {
        let g = build_weighted(n, &edges);
        let src = src_seed % n;
        let reachable: BTreeSet<usize> = g
            .dijkstra(src)
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(|(v, _)| v)
            .collect();

        for order in [g.dfs(src, None), g.bfs(src, None)] {
            prop_assert_eq!(order.first(), Some(&src));
            let visited: BTreeSet<usize> = order.iter().copied().collect();
            prop_assert_eq!(visited.len(), order.len());
            prop_assert_eq!(&visited, &reachable);
        }
    }

    #[test]
    fn components_match_petgraph((n, edges) in undirected_edges()) {
        let g = build_labeled(n, &edges);
        let pg = build_petgraph_undirected(n, &edges);
        prop_assert_eq!(g.count_connected_components(), algo::connected_components(&pg));
    }

    #[test]
    fn undirected_cycle_matches_petgraph((n, edges) in undirected_edges()) {
        let g = build_labeled(n, &edges);
        let pg = build_petgraph_undirected(n, &edges);
        prop_assert_eq!(g.has_cycle(), algo::is_cyclic_undirected(&pg));
    }

    #[test]
    fn add_edge_twice_changes_nothing((n, edges) in undirected_edges(), a in 0u8..10, b in 0u8..10) {
        let mut g = build_labeled(n, &edges);
        g.add_edge(a, b);
        let once = g.edges();
        g.add_edge(a, b);
        g.add_edge(b, a);
        prop_assert_eq!(g.edges(), once);
    }

    #[test]
    fn remove_vertex_erases_every_reference((n, edges) in undirected_edges(), victim in 0u8..10) {
        let mut g = build_labeled(n, &edges);
        let order_before: Vec<u8> = g.vertices().into_iter().filter(|v| *v != victim).collect();

        g.remove_vertex(&victim);
        prop_assert!(!g.vertices().contains(&victim));
        prop_assert_eq!(g.vertices(), order_before);
        for v in g.vertices() {
            prop_assert!(!g.neighbors(&v).unwrap_or(&[]).contains(&victim));
        }
        prop_assert!(g.edges().iter().all(|&(u, v)| u != victim && v != victim));
    }

    #[test]
    fn undirected_edges_reported_once((n, edges) in undirected_edges()) {
        let g = build_labeled(n, &edges);
        let reported = g.edges();
        let unique: BTreeSet<(u8, u8)> = reported.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        prop_assert_eq!(unique.len(), reported.len());
        prop_assert_eq!(reported.len(), g.edge_count());
    }
}
