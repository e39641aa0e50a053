// tests/graph_builder.rs

mod common;

use std::collections::HashMap;

use subdag::{DependencyType, GraphBuilder, InputType, NodeSpec, SubdagError};
use subdag_test_utils::builders::{diamond_graph, sum_node};

#[test]
fn undeclared_dependencies_become_inputs() {
    let graph = GraphBuilder::new()
        .node(
            NodeSpec::new("area", "float")
                .dep("width", "float")
                .optional_dep("height", "float")
                .callable(|kwargs: &HashMap<String, f64>| Ok(kwargs.values().product())),
        )
        .build()
        .unwrap();

    assert_eq!(common::sorted_names(&graph), vec!["area", "height", "width"]);
    let width = graph.get("width").unwrap();
    assert!(width.is_user_defined());
    assert_eq!(width.type_name(), "float");

    let mut inputs: Vec<&str> = graph.inputs().map(|n| n.name()).collect();
    inputs.sort();
    assert_eq!(inputs, vec!["height", "width"]);

    let area = graph.get("area").unwrap();
    assert!(!area.is_user_defined());
    assert_eq!(
        area.input_types().get("height"),
        Some(&InputType::optional("float"))
    );
    assert_eq!(area.dependency_type("width"), DependencyType::Required);
    assert_eq!(area.dependency_type("unrelated"), DependencyType::Required);
}

#[test]
fn duplicate_names_are_rejected() {
    let result = GraphBuilder::new()
        .input("a", "int")
        .node(sum_node("a", &["b"]))
        .build();

    assert!(matches!(result, Err(SubdagError::DuplicateNode(ref name)) if name == "a"));
}

#[test]
fn dependents_are_the_transpose_of_dependencies() {
    let graph = diamond_graph();

    for id in graph.node_ids() {
        for &dep in graph.dependencies_of(id) {
            assert!(graph.dependents_of(dep).contains(&id));
        }
        for &dependent in graph.dependents_of(id) {
            assert!(graph.dependencies_of(dependent).contains(&id));
        }
    }

    let a = graph.id_of("a").unwrap();
    let mut dependents: Vec<&str> = graph
        .dependents_of(a)
        .iter()
        .map(|&id| graph.node(id).name())
        .collect();
    dependents.sort();
    assert_eq!(dependents, vec!["b", "c"]);
}

#[test]
fn repeated_dependency_is_recorded_once() {
    let graph = GraphBuilder::new()
        .node(sum_node("twice", &["x", "x"]))
        .build()
        .unwrap();

    let twice = graph.get("twice").unwrap();
    assert_eq!(twice.dependencies().len(), 1);
    assert_eq!(graph.get("x").unwrap().depended_on_by().len(), 1);
}

#[test]
fn tags_and_docs_are_kept() {
    let graph = GraphBuilder::new()
        .node(
            sum_node("report", &["rows"])
                .tag("owner", "analytics")
                .doc("Row count for the daily report."),
        )
        .build()
        .unwrap();

    let report = graph.get("report").unwrap();
    assert_eq!(report.tag("owner"), Some("analytics"));
    assert_eq!(report.tag("missing"), None);
    assert_eq!(report.documentation(), "Row count for the daily report.");
    assert!(report.callable().is_some());
}

#[test]
fn unknown_names_fail_to_resolve() {
    let graph = diamond_graph();

    assert!(matches!(
        graph.ids_of(&["a", "zzz"]),
        Err(SubdagError::UnknownNode(ref name)) if name == "zzz"
    ));
}
