#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::anyhow;
use subdag::{FunctionGraph, GraphBuilder, NodeSpec};

/// Node computing the product of its present arguments times `factor`.
pub fn product_node(name: &str, deps: &[&str], factor: i64) -> NodeSpec<i64> {
    deps.iter()
        .fold(NodeSpec::new(name, "int"), |spec, dep| spec.dep(*dep, "int"))
        .callable(move |kwargs: &HashMap<String, i64>| {
            Ok(kwargs.values().product::<i64>() * factor)
        })
}

/// Node summing its present arguments.
pub fn sum_node(name: &str, deps: &[&str]) -> NodeSpec<i64> {
    deps.iter()
        .fold(NodeSpec::new(name, "int"), |spec, dep| spec.dep(*dep, "int"))
        .callable(|kwargs: &HashMap<String, i64>| Ok(kwargs.values().sum::<i64>()))
}

/// Node that always fails with `message`.
pub fn failing_node(name: &str, deps: &[&str], message: &'static str) -> NodeSpec<i64> {
    deps.iter()
        .fold(NodeSpec::new(name, "int"), |spec, dep| spec.dep(*dep, "int"))
        .callable(move |_kwargs: &HashMap<String, i64>| Err(anyhow!(message)))
}

/// `x (input) -> double -> triple`
pub fn double_triple_graph() -> FunctionGraph<i64> {
    GraphBuilder::new()
        .input("x", "int")
        .node(product_node("double", &["x"], 2))
        .node(product_node("triple", &["double"], 3))
        .build()
        .expect("double/triple graph should build")
}

/// Straight chain `names[0] -> names[1] -> ...`; the first name is an input.
pub fn chain_graph(names: &[&str]) -> FunctionGraph<i64> {
    let mut builder = GraphBuilder::new();
    if let Some(first) = names.first() {
        builder = builder.input(*first, "int");
    }
    for pair in names.windows(2) {
        builder = builder.node(sum_node(pair[1], &[pair[0]]));
    }
    builder.build().expect("chain graph should build")
}

/// Diamond `a -> {b, c} -> d`, with `a` an input.
pub fn diamond_graph() -> FunctionGraph<i64> {
    GraphBuilder::new()
        .input("a", "int")
        .node(sum_node("b", &["a"]))
        .node(product_node("c", &["a"], 10))
        .node(sum_node("d", &["b", "c"]))
        .build()
        .expect("diamond graph should build")
}

/// Build a list of owned `(name, value)` pairs into a map.
pub fn values(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}
