#![allow(dead_code)]

use subdag::{FunctionGraph, NodeId};

/// Names of `ids`, in order.
pub fn names<V>(graph: &FunctionGraph<V>, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| graph.node(id).name().to_string()).collect()
}

pub fn name_of<V>(graph: &FunctionGraph<V>, id: Option<NodeId>) -> Option<String> {
    id.map(|id| graph.node(id).name().to_string())
}

/// Every node name in the graph, sorted.
pub fn sorted_names<V>(graph: &FunctionGraph<V>) -> Vec<String> {
    let mut all: Vec<String> = graph.names().map(str::to_string).collect();
    all.sort();
    all
}
