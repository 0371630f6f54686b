use acyclic::{
    longest_path, DirectedAcyclicGraph, DirectedEdge, DirectedGraph, GraphError, VertexId,
};

//          B - C
//         /     \
// A ---- D ----- E
//         \
//          F
fn simple_graph() -> DirectedGraph<&'static str> {
    DirectedGraph::from_paths([
        vec!["A", "B", "C", "E"],
        vec!["A", "D", "E"],
        vec!["D", "F"],
    ])
}

fn edge(from: &'static str, to: &'static str) -> DirectedEdge<&'static str> {
    DirectedEdge::between_vertices(VertexId::from_id(from), VertexId::from_id(to))
}

#[test]
fn sanity_longest_path_from_a() {
    let dag = DirectedAcyclicGraph::of(simple_graph()).expect("simple graph is acyclic");

    let path = longest_path(&dag, &VertexId::from_id("A")).expect("longest path from A was found");
    let ids: Vec<_> = path.into_iter().map(VertexId::into_id).collect();
    assert_eq!(ids, vec!["A", "B", "C", "E"]);
}

#[test]
fn from_paths_builds_expected_edges() {
    let expected = DirectedGraph::of_edges([
        edge("A", "B"),
        edge("B", "C"),
        edge("C", "E"),
        edge("A", "D"),
        edge("D", "E"),
        edge("D", "F"),
    ]);
    assert_eq!(simple_graph(), expected);
    assert_eq!(simple_graph().edge_count(), 6);
}

#[test]
fn absent_vertex_has_no_path() {
    let dag = DirectedAcyclicGraph::of(simple_graph()).unwrap();
    assert_eq!(longest_path(&dag, &VertexId::from_id("X")), None);
}

#[test]
fn three_cycle_is_rejected() {
    let graph = DirectedGraph::of_edges([edge("A", "B"), edge("B", "C"), edge("C", "A")]);
    assert!(matches!(
        DirectedAcyclicGraph::of(graph),
        Err(GraphError::CycleDetected { .. })
    ));
}

#[test]
fn topological_order_respects_every_edge() {
    let dag = DirectedAcyclicGraph::of(simple_graph()).unwrap();
    let order = dag.topological_order();
    let position = |v: &VertexId<&str>| order.iter().position(|o| o == v).unwrap();

    for e in dag.edges() {
        assert!(position(e.from()) < position(e.to()), "edge {e} goes backwards");
    }
    assert_eq!(order.len(), dag.directed_graph().vertices().len());
}

#[test]
fn dags_over_same_edges_are_equal() {
    let a = DirectedAcyclicGraph::of(simple_graph()).unwrap();
    let reordered = DirectedGraph::of_edges(simple_graph().edges().iter().rev().copied());
    let b = DirectedAcyclicGraph::of(reordered).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.directed_graph(), b.directed_graph());
}

#[test]
fn duplicate_edges_collapse() {
    let once = DirectedGraph::of_edges([edge("A", "B"), edge("B", "C")]);
    let twice = DirectedGraph::of_edges([edge("A", "B"), edge("B", "C"), edge("A", "B")]);
    assert_eq!(once, twice);
}

#[test]
fn add_then_remove_is_identity() {
    let graph = simple_graph();
    let restored = graph.add_edge(edge("F", "G")).remove_edge(&edge("F", "G"));
    assert_eq!(restored, graph);
}

#[test]
fn adding_a_back_edge_makes_the_dag_cyclic() {
    let graph = simple_graph();
    assert!(DirectedAcyclicGraph::of(graph.clone()).is_ok());

    let cyclic = graph.add_edge(edge("E", "A"));
    assert!(DirectedAcyclicGraph::of(cyclic).is_err());
    // The original value is untouched.
    assert!(DirectedAcyclicGraph::of(graph).is_ok());
}
