use std::collections::BTreeMap;

use acyclic::strategy::{arb_acyclic_graph, arb_graph, arb_paths};
use acyclic::{
    compute_maximum_path_lengths_to_each_node, critical_path, longest_path, DirectedAcyclicGraph,
    DirectedGraph, VertexId,
};
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

fn to_petgraph(graph: &DirectedGraph<u32>) -> DiGraphMap<u32, ()> {
    DiGraphMap::from_edges(graph.edges().iter().map(|e| (*e.from().id(), *e.to().id())))
}

fn adjacency(graph: &DirectedGraph<u32>) -> BTreeMap<u32, Vec<u32>> {
    let mut adj: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for e in graph.edges() {
        adj.entry(*e.from().id()).or_default().push(*e.to().id());
    }
    adj
}

/// Vertex count of the longest forward path from `v`, by exhaustive search.
fn brute_longest(adj: &BTreeMap<u32, Vec<u32>>, v: u32) -> usize {
    1 + adj
        .get(&v)
        .map(|succ| succ.iter().map(|&s| brute_longest(adj, s)).max().unwrap_or(0))
        .unwrap_or(0)
}

fn assert_is_path(graph: &DirectedGraph<u32>, path: &[VertexId<u32>]) {
    for pair in path.windows(2) {
        assert!(
            graph.get_edge(&pair[0], &pair[1]).is_some(),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

proptest! {
    #[test]
    fn construction_succeeds_exactly_for_acyclic_graphs(graph in arb_graph(12, 30)) {
        let expected_acyclic = petgraph::algo::toposort(&to_petgraph(&graph), None).is_ok();
        prop_assert_eq!(DirectedAcyclicGraph::of(graph).is_ok(), expected_acyclic);
    }

    #[test]
    fn topological_order_is_valid_and_complete(graph in arb_acyclic_graph(16, 40)) {
        let dag = DirectedAcyclicGraph::of(graph.clone()).unwrap();
        prop_assert!(dag.validate_invariants());

        let position: BTreeMap<_, _> = dag
            .topological_order()
            .iter()
            .enumerate()
            .map(|(i, v)| (*v.id(), i))
            .collect();
        prop_assert_eq!(position.len(), dag.topological_order().len());
        prop_assert_eq!(position.len(), graph.vertices().len());

        for e in graph.edges() {
            prop_assert!(position[e.from().id()] < position[e.to().id()]);
        }
    }

    #[test]
    fn order_is_deterministic(graph in arb_acyclic_graph(16, 40)) {
        let a = DirectedAcyclicGraph::of(graph.clone()).unwrap();
        let shuffled = DirectedGraph::of_edges(graph.edges().iter().rev().copied());
        let b = DirectedAcyclicGraph::of(shuffled).unwrap();
        prop_assert_eq!(a.topological_order(), b.topological_order());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn longest_path_is_a_maximal_forward_path(graph in arb_acyclic_graph(10, 25)) {
        let dag = DirectedAcyclicGraph::of(graph.clone()).unwrap();
        let adj = adjacency(&graph);

        for start in graph.vertices() {
            let path = longest_path(&dag, &start).unwrap();
            prop_assert_eq!(&path[0], &start);
            assert_is_path(&graph, &path);
            prop_assert_eq!(path.len(), brute_longest(&adj, *start.id()));
        }

        prop_assert!(longest_path(&dag, &VertexId::from_id(u32::MAX)).is_none());
    }

    #[test]
    fn critical_path_matches_maximum_path_length(graph in arb_acyclic_graph(10, 25)) {
        let dag = DirectedAcyclicGraph::of(graph.clone()).unwrap();
        let lengths = compute_maximum_path_lengths_to_each_node(&dag);

        match critical_path(&dag) {
            None => prop_assert!(graph.is_empty()),
            Some(path) => {
                assert_is_path(&graph, &path);
                let longest_edges = lengths.values().copied().max().unwrap();
                prop_assert_eq!(path.len(), longest_edges + 1);
                prop_assert_eq!(lengths[path.last().unwrap()], longest_edges);
            }
        }
    }

    #[test]
    fn from_paths_chains_every_consecutive_pair(paths in arb_paths(8, 5, 6)) {
        let graph = DirectedGraph::from_paths(paths.clone());
        let mut expected = 0usize;
        for path in &paths {
            for pair in path.windows(2) {
                let from = VertexId::from_id(pair[0]);
                let to = VertexId::from_id(pair[1]);
                prop_assert!(graph.get_edge(&from, &to).is_some());
                expected += 1;
            }
        }
        prop_assert!(graph.edge_count() <= expected);
    }

    #[test]
    fn add_then_remove_round_trips(graph in arb_graph(8, 20), from in 0u32..8, to in 0u32..8) {
        let edge = (from, to).into();
        prop_assume!(!graph.contains_edge(&edge));
        prop_assert_eq!(graph.add_edge(edge).remove_edge(&edge), graph);
    }
}
