// tests/graph_order.rs

mod common;

use common::names;
use subdag::{GraphBuilder, NodeId, SubdagError, node_levels, topologically_sort_nodes};
use subdag_test_utils::builders::{chain_graph, diamond_graph, sum_node};

#[test]
fn chain_sorts_dependencies_first() {
    let graph = chain_graph(&["a", "b", "c", "d"]);
    let mut ids: Vec<NodeId> = graph.node_ids().collect();
    ids.reverse();

    let sorted = topologically_sort_nodes(&graph, &ids);

    assert_eq!(names(&graph, &sorted), vec!["a", "b", "c", "d"]);
}

#[test]
fn ties_are_broken_first_in_first_out() {
    let graph = GraphBuilder::new()
        .input("p", "int")
        .input("q", "int")
        .node(sum_node("from_q", &["q"]))
        .node(sum_node("from_p", &["p"]))
        .build()
        .unwrap();

    let ids = graph.ids_of(&["q", "p", "from_p", "from_q"]).unwrap();
    let sorted = topologically_sort_nodes(&graph, &ids);

    // Sources in input order, then dependents in the order they became ready.
    assert_eq!(names(&graph, &sorted), vec!["q", "p", "from_q", "from_p"]);
}

#[test]
fn diamond_respects_every_edge() {
    let graph = diamond_graph();
    let ids: Vec<NodeId> = graph.node_ids().collect();

    let sorted = topologically_sort_nodes(&graph, &ids);
    assert_eq!(sorted.len(), ids.len());

    let pos = |id: NodeId| sorted.iter().position(|&s| s == id).unwrap();
    for &id in &ids {
        for &dep in graph.dependencies_of(id) {
            assert!(pos(dep) < pos(id));
        }
    }
}

#[test]
fn repeated_source_releases_dependents_once() {
    let graph = chain_graph(&["a", "b"]);
    let ids = graph.ids_of(&["a", "a", "b"]).unwrap();

    let sorted = topologically_sort_nodes(&graph, &ids);

    assert_eq!(names(&graph, &sorted), vec!["a", "a", "b"]);
    assert!(sorted.len() <= ids.len());
}

#[test]
fn node_with_dependency_outside_subset_is_dropped() {
    let graph = chain_graph(&["a", "b", "c"]);
    // `b` depends on `a`, which is not part of the requested subset.
    let ids = graph.ids_of(&["b", "c"]).unwrap();

    let sorted = topologically_sort_nodes(&graph, &ids);

    assert!(sorted.is_empty());
}

#[test]
fn cycle_yields_fewer_nodes_without_error() {
    let graph = GraphBuilder::new()
        .input("root", "int")
        .node(sum_node("a", &["b"]))
        .node(sum_node("b", &["a"]))
        .node(sum_node("ok", &["root"]))
        .build()
        .unwrap();
    let ids: Vec<NodeId> = graph.node_ids().collect();

    let sorted = topologically_sort_nodes(&graph, &ids);

    assert_eq!(names(&graph, &sorted), vec!["root", "ok"]);
}

#[test]
fn validate_acyclic_reports_cycles() {
    let graph = GraphBuilder::new()
        .node(sum_node("a", &["b"]))
        .node(sum_node("b", &["a"]))
        .build()
        .unwrap();

    match graph.validate_acyclic() {
        Err(SubdagError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("'a'") || msg.contains("'b'"));
        }
        other => panic!("expected DagCycle, got {:?}", other),
    }

    assert!(diamond_graph().validate_acyclic().is_ok());
}

#[test]
fn levels_follow_longest_path() {
    let graph = GraphBuilder::new()
        .input("a", "int")
        .node(sum_node("b", &["a"]))
        .node(sum_node("c", &["b"]))
        .node(sum_node("short", &["a", "c"]))
        .node(sum_node("lonely", &["z"]))
        .build()
        .unwrap();
    let ids: Vec<NodeId> = graph.node_ids().collect();
    let sorted = topologically_sort_nodes(&graph, &ids);

    let levels = node_levels(&graph, &sorted);

    assert_eq!(levels["a"], 0);
    assert_eq!(levels["b"], 1);
    assert_eq!(levels["c"], 2);
    assert_eq!(levels["short"], 3);
    assert_eq!(levels["z"], 0);
    assert_eq!(levels["lonely"], 1);
}

#[test]
fn levels_only_count_dependencies_in_the_set() {
    let graph = chain_graph(&["a", "b", "c"]);
    let ids = graph.ids_of(&["b", "c"]).unwrap();

    // Already in dependency order; `a` is outside the working set.
    let levels = node_levels(&graph, &ids);

    assert_eq!(levels.len(), 2);
    assert_eq!(levels["b"], 0);
    assert_eq!(levels["c"], 1);
}
