// src/dag/order.rs

//! Evaluation order and depth of a set of nodes.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::dag::graph::FunctionGraph;
use crate::dag::node::NodeId;

/// Order `nodes` so that every dependency precedes its dependents (Kahn).
///
/// In-degrees count *all* dependencies of a node, not only those inside
/// `nodes`. Consequences, kept on purpose:
/// - a node depending on something outside `nodes` never becomes ready and
///   is left out of the result;
/// - nodes on a cycle are left out as well.
///
/// Neither case is reported. Compare the output length with the input
/// length, or run [`FunctionGraph::validate_acyclic`], if that matters.
///
/// Ties are broken first-in first-out, starting from the dependency-free
/// nodes in input order.
pub fn topologically_sort_nodes<V>(graph: &FunctionGraph<V>, nodes: &[NodeId]) -> Vec<NodeId> {
    let mut in_degrees: HashMap<NodeId, usize> = nodes
        .iter()
        .map(|&id| (id, graph.dependencies_of(id).len()))
        .collect();

    let mut queue: VecDeque<NodeId> = nodes
        .iter()
        .copied()
        .filter(|&id| graph.dependencies_of(id).is_empty())
        .collect();

    let mut sorted = Vec::with_capacity(nodes.len());
    while let Some(id) = queue.pop_front() {
        sorted.push(id);
        for &next in graph.dependents_of(id) {
            // A source listed twice would otherwise release its dependents twice.
            if let Some(degree) = in_degrees.get_mut(&next).filter(|d| **d > 0) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(next);
                }
            }
        }
    }

    if sorted.len() < in_degrees.len() {
        debug!(
            requested = in_degrees.len(),
            sorted = sorted.len(),
            "topological sort dropped nodes with unresolved dependencies"
        );
    }

    sorted
}

/// Longest-path depth of each node within `sorted`.
///
/// A node with no dependency inside the set is level 0; otherwise it sits
/// one level below its deepest in-set dependency. `sorted` must already be
/// topologically sorted. That is not checked: a dependency whose level has
/// not been computed yet counts as 0.
pub fn node_levels<V>(graph: &FunctionGraph<V>, sorted: &[NodeId]) -> HashMap<String, usize> {
    let in_set: HashSet<NodeId> = sorted.iter().copied().collect();
    let mut levels: HashMap<NodeId, usize> = HashMap::with_capacity(sorted.len());

    for &id in sorted {
        let level = graph
            .dependencies_of(id)
            .iter()
            .filter(|dep| in_set.contains(dep))
            .map(|dep| levels.get(dep).copied().unwrap_or(0) + 1)
            .max()
            .unwrap_or(0);
        levels.insert(id, level);
    }

    levels
        .into_iter()
        .map(|(id, level)| (graph.node(id).name().to_string(), level))
        .collect()
}
