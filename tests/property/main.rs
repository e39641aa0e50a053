use std::collections::{BTreeSet, HashMap, HashSet};

use proptest::prelude::*;
use subdag::{
    FunctionGraph, GraphBuilder, LocalAdapter, NodeId, execute_subdag, node_levels,
    topologically_sort_nodes,
};
use subdag_test_utils::builders::{sum_node, values};
use subdag_test_utils::recording_adapter::RecordingAdapter;

// Node i may only depend on nodes 0..i, so every generated graph is acyclic.
// node_0 is the only input.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = Vec<BTreeSet<usize>>> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_nodes),
            num_nodes,
        )
        .prop_map(|raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential.into_iter().map(|dep| dep % i).collect()
                    }
                })
                .collect()
        })
    })
}

fn name(i: usize) -> String {
    format!("node_{}", i)
}

fn build(deps: &[BTreeSet<usize>]) -> FunctionGraph<i64> {
    let mut builder = GraphBuilder::new().input(name(0), "int");
    for (i, node_deps) in deps.iter().enumerate().skip(1) {
        let dep_names: Vec<String> = node_deps.iter().map(|&d| name(d)).collect();
        let dep_refs: Vec<&str> = dep_names.iter().map(String::as_str).collect();
        builder = builder.node(sum_node(&name(i), &dep_refs));
    }
    builder.build().expect("generated graph should build")
}

fn reference_levels(deps: &[BTreeSet<usize>]) -> Vec<usize> {
    let mut levels = Vec::with_capacity(deps.len());
    for node_deps in deps {
        let level = node_deps.iter().map(|&d| levels[d] + 1).max().unwrap_or(0);
        levels.push(level);
    }
    levels
}

fn reference_values(deps: &[BTreeSet<usize>], seed: i64) -> Vec<i64> {
    let mut out = Vec::with_capacity(deps.len());
    for (i, node_deps) in deps.iter().enumerate() {
        let value = if i == 0 {
            seed
        } else {
            node_deps.iter().map(|&d| out[d]).sum()
        };
        out.push(value);
    }
    out
}

proptest! {
    #[test]
    fn sort_keeps_every_node_and_respects_edges(deps in dag_strategy(12)) {
        let graph = build(&deps);
        let mut all: Vec<_> = graph.node_ids().collect();
        all.reverse();

        let sorted = topologically_sort_nodes(&graph, &all);
        prop_assert_eq!(sorted.len(), graph.len());

        let position: HashMap<_, _> = sorted
            .iter()
            .enumerate()
            .map(|(pos, &id)| (id, pos))
            .collect();
        for &id in &sorted {
            for dep in graph.dependencies_of(id) {
                prop_assert!(position[dep] < position[&id]);
            }
        }
    }

    #[test]
    fn levels_follow_the_longest_path(deps in dag_strategy(12)) {
        let graph = build(&deps);
        let all: Vec<_> = graph.node_ids().collect();
        let sorted = topologically_sort_nodes(&graph, &all);

        let levels = node_levels(&graph, &sorted);
        let expected = reference_levels(&deps);

        for (i, level) in expected.into_iter().enumerate() {
            prop_assert_eq!(levels[&name(i)], level);
        }

        // Declaration order is another valid ordering for these graphs.
        let declared: Vec<NodeId> = (0..deps.len())
            .map(|i| graph.id_of(&name(i)).unwrap())
            .collect();
        prop_assert_eq!(node_levels(&graph, &declared), levels);
    }

    #[test]
    fn full_execution_runs_each_node_once(deps in dag_strategy(12), seed in -100i64..100) {
        let graph = build(&deps);
        let all: Vec<_> = graph.node_ids().collect();
        let adapter = RecordingAdapter::new();

        let computed = execute_subdag(
            &graph,
            &all,
            &values(&[("node_0", seed)]),
            &adapter,
            None,
            None,
        )
        .unwrap();

        let executed = adapter.executed();
        let unique: HashSet<&String> = executed.iter().collect();
        prop_assert_eq!(executed.len(), deps.len() - 1);
        prop_assert_eq!(unique.len(), executed.len());

        for (i, value) in reference_values(&deps, seed).into_iter().enumerate() {
            prop_assert_eq!(computed[&name(i)], value);
        }
    }

    #[test]
    fn local_adapter_agrees_with_recording_adapter(deps in dag_strategy(8)) {
        let graph = build(&deps);
        let last = graph.id_of(&name(deps.len() - 1)).unwrap();
        let inputs = values(&[("node_0", 3)]);

        let local = execute_subdag(&graph, &[last], &inputs, &LocalAdapter, None, None).unwrap();
        let recorded =
            execute_subdag(&graph, &[last], &inputs, &RecordingAdapter::new(), None, None).unwrap();

        prop_assert_eq!(local, recorded);
    }
}
