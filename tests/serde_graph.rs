use acyclic::{DirectedAcyclicGraph, DirectedGraph, VertexId};
use serde_json::json;

#[test]
fn graph_serializes_as_ordered_edge_list() {
    let graph: DirectedGraph<&str> = DirectedGraph::from_paths([vec!["B", "C"], vec!["A", "B"]]);
    let value = serde_json::to_value(&graph).unwrap();
    assert_eq!(
        value,
        json!([
            { "from": "A", "to": "B" },
            { "from": "B", "to": "C" },
        ])
    );
}

#[test]
fn duplicate_edges_collapse_on_decode() {
    let graph: DirectedGraph<u32> =
        serde_json::from_str(r#"[{"from":1,"to":2},{"from":1,"to":2},{"from":2,"to":3}]"#).unwrap();
    assert_eq!(graph, DirectedGraph::from_paths([vec![1u32, 2, 3]]));
}

#[test]
fn missing_endpoint_is_rejected() {
    let result = serde_json::from_str::<DirectedGraph<u32>>(r#"[{"from":1}]"#);
    assert!(result.is_err());
}

#[test]
fn dag_decodes_through_acyclicity_check() {
    let dag: DirectedAcyclicGraph<u32> =
        serde_json::from_str(r#"[{"from":1,"to":2},{"from":2,"to":3}]"#).unwrap();
    let order: Vec<_> = dag.topological_order().iter().map(|v| *v.id()).collect();
    assert_eq!(order, vec![1, 2, 3]);

    let err = serde_json::from_str::<DirectedAcyclicGraph<u32>>(
        r#"[{"from":1,"to":2},{"from":2,"to":1}]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("cycle"), "unexpected error: {err}");
}

#[test]
fn dag_encodes_as_its_graph() {
    let graph: DirectedGraph<u32> = DirectedGraph::from_paths([vec![3u32, 1, 2]]);
    let dag = DirectedAcyclicGraph::of(graph.clone()).unwrap();
    assert_eq!(
        serde_json::to_string(&dag).unwrap(),
        serde_json::to_string(&graph).unwrap()
    );
}

#[test]
fn vertex_id_is_transparent() {
    assert_eq!(serde_json::to_string(&VertexId::from_id("A")).unwrap(), r#""A""#);
}
