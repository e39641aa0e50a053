// src/exec/subdag.rs

//! Memoized depth-first execution of the part of a graph needed for a set
//! of requested nodes.

use std::collections::{HashMap, HashSet};

use tracing::{debug, error, warn};

use crate::dag::{DependencyType, FunctionGraph, NodeId};
use crate::errors::{Result, SubdagError};
use crate::exec::adapter::GraphAdapter;

/// Compute `nodes` and everything they transitively need.
///
/// - `inputs` supplies values for user-defined nodes.
/// - `computed` seeds the cache; anything already in it is not recomputed.
/// - `overrides` replaces a node's value outright. Its dependencies are not
///   visited at all, so inputs feeding only an overridden node are never
///   looked up.
///
/// Returns the cache extended with every node evaluated. A user-defined node
/// that is missing from `inputs` fails the call when reached through a
/// required edge and is skipped (left out of the cache) when reached through
/// an optional one. A requested node that is itself user-defined is treated
/// as optional.
///
/// Adapter errors are logged and returned as [`SubdagError::NodeExecution`]
/// wrapping the original error.
pub fn execute_subdag<V, A>(
    graph: &FunctionGraph<V>,
    nodes: &[NodeId],
    inputs: &HashMap<String, V>,
    adapter: &A,
    computed: Option<HashMap<String, V>>,
    overrides: Option<&HashMap<String, V>>,
) -> Result<HashMap<String, V>>
where
    V: Clone,
    A: GraphAdapter<V> + ?Sized,
{
    let mut computed = computed.unwrap_or_default();
    let no_overrides = HashMap::new();

    {
        let mut run = SubdagRun {
            graph,
            inputs,
            overrides: overrides.unwrap_or(&no_overrides),
            adapter,
            computed: &mut computed,
            in_progress: HashSet::new(),
        };

        for &id in nodes {
            // From the top level we can't know whether the caller meant to
            // supply an input, so it is never required here.
            let dependency_type = if graph.node(id).is_user_defined() {
                DependencyType::Optional
            } else {
                DependencyType::Required
            };
            run.traverse(id, dependency_type)?;
        }
    }

    Ok(computed)
}

/// A node whose dependencies are being resolved.
struct Frame {
    node: NodeId,
    /// Kind of the edge this node was reached through.
    dependency_type: DependencyType,
    next_dep: usize,
}

/// Request-scoped traversal state.
struct SubdagRun<'a, V, A: ?Sized> {
    graph: &'a FunctionGraph<V>,
    inputs: &'a HashMap<String, V>,
    overrides: &'a HashMap<String, V>,
    adapter: &'a A,
    computed: &'a mut HashMap<String, V>,
    /// Nodes currently on the work stack.
    in_progress: HashSet<NodeId>,
}

impl<'a, V, A> SubdagRun<'a, V, A>
where
    V: Clone,
    A: GraphAdapter<V> + ?Sized,
{
    /// Post-order walk from `root`, dependencies in declared order.
    fn traverse(&mut self, root: NodeId, dependency_type: DependencyType) -> Result<()> {
        let graph = self.graph;
        let mut stack: Vec<Frame> = self.enter(root, dependency_type).into_iter().collect();

        while let Some(frame) = stack.last_mut() {
            let node = graph.node(frame.node);
            let deps = node.dependencies();

            if frame.next_dep < deps.len() {
                let dep = deps[frame.next_dep];
                frame.next_dep += 1;

                let dep_name = graph.node(dep).name();
                if self.computed.contains_key(dep_name) {
                    continue;
                }
                if self.in_progress.contains(&dep) {
                    warn!(
                        node = %node.name(),
                        dependency = %dep_name,
                        "dependency is already being resolved (cycle?); not descending"
                    );
                    continue;
                }
                if let Some(child) = self.enter(dep, node.dependency_type(dep_name)) {
                    stack.push(child);
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            self.in_progress.remove(&done.node);
            self.evaluate(done.node, done.dependency_type)?;
        }

        Ok(())
    }

    /// Short-circuit `id` if it is cached or overridden; otherwise return a
    /// frame so its dependencies get resolved first.
    fn enter(&mut self, id: NodeId, dependency_type: DependencyType) -> Option<Frame> {
        let graph = self.graph;
        let name = graph.node(id).name();
        if self.computed.contains_key(name) {
            return None;
        }
        if let Some(value) = self.overrides.get(name) {
            debug!(node = %name, "using override");
            self.computed.insert(name.to_string(), value.clone());
            return None;
        }
        self.in_progress.insert(id);
        Some(Frame {
            node: id,
            dependency_type,
            next_dep: 0,
        })
    }

    /// Produce the value of a node whose dependencies have been resolved.
    fn evaluate(&mut self, id: NodeId, dependency_type: DependencyType) -> Result<()> {
        let graph = self.graph;
        let node = graph.node(id);
        debug!(node = %node.name(), "computing node");

        let value = if node.is_user_defined() {
            match self.inputs.get(node.name()) {
                Some(value) => value.clone(),
                None if dependency_type == DependencyType::Optional => {
                    debug!(node = %node.name(), "optional input not supplied; skipping");
                    return Ok(());
                }
                None => {
                    return Err(SubdagError::MissingRequiredInput {
                        node: node.name().to_string(),
                    });
                }
            }
        } else {
            let kwargs: HashMap<String, V> = node
                .dependencies()
                .iter()
                .filter_map(|&dep| {
                    let dep_name = graph.node(dep).name();
                    self.computed
                        .get(dep_name)
                        .map(|value| (dep_name.to_string(), value.clone()))
                })
                .collect();

            match self.adapter.execute_node(node, &kwargs) {
                Ok(value) => value,
                Err(source) => {
                    error!(node = %node.name(), error = %source, "node encountered an error");
                    return Err(SubdagError::NodeExecution {
                        node: node.name().to_string(),
                        source,
                    });
                }
            }
        };

        self.computed.insert(node.name().to_string(), value);
        Ok(())
    }
}
