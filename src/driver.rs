// src/driver.rs

//! High-level entry point tying a graph, its config and an adapter together.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::combine_config_and_inputs;
use crate::dag::{
    FunctionGraph, Node, NodePredicate, node_levels, nodes_between, topologically_sort_nodes,
};
use crate::errors::{Result, SubdagError};
use crate::exec::{GraphAdapter, execute_subdag};

/// Runs requests against one graph.
///
/// The graph and config are fixed at construction. Each call to
/// [`Driver::execute`] gets its own computed cache, so a driver can serve
/// many requests (and be shared between threads when `V` and `A` allow it).
pub struct Driver<V, A> {
    graph: Arc<FunctionGraph<V>>,
    config: HashMap<String, V>,
    adapter: A,
}

impl<V, A> Driver<V, A>
where
    V: Clone,
    A: GraphAdapter<V>,
{
    pub fn new(graph: FunctionGraph<V>, config: HashMap<String, V>, adapter: A) -> Self {
        Self::with_shared_graph(Arc::new(graph), config, adapter)
    }

    pub fn with_shared_graph(
        graph: Arc<FunctionGraph<V>>,
        config: HashMap<String, V>,
        adapter: A,
    ) -> Self {
        debug!(nodes = graph.len(), config_keys = config.len(), "driver created");
        Self {
            graph,
            config,
            adapter,
        }
    }

    pub fn graph(&self) -> &FunctionGraph<V> {
        &self.graph
    }

    pub fn config(&self) -> &HashMap<String, V> {
        &self.config
    }

    /// Compute `final_vars` and return only those values.
    ///
    /// A requested user-defined node that was not supplied is simply absent
    /// from the result.
    pub fn execute<S: AsRef<str>>(
        &self,
        final_vars: &[S],
        overrides: Option<&HashMap<String, V>>,
        inputs: HashMap<String, V>,
    ) -> Result<HashMap<String, V>> {
        let mut computed = self.raw_execute(final_vars, overrides, inputs)?;
        Ok(final_vars
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                computed.remove(name).map(|value| (name.to_string(), value))
            })
            .collect())
    }

    /// Compute `final_vars` and return every value produced along the way.
    pub fn raw_execute<S: AsRef<str>>(
        &self,
        final_vars: &[S],
        overrides: Option<&HashMap<String, V>>,
        inputs: HashMap<String, V>,
    ) -> Result<HashMap<String, V>> {
        let nodes = self.graph.ids_of(final_vars)?;
        let inputs = combine_config_and_inputs(self.config.clone(), inputs)?;

        info!(
            requested = nodes.len(),
            inputs = inputs.len(),
            overrides = overrides.map_or(0, HashMap::len),
            "executing subdag"
        );

        let computed = execute_subdag(
            &*self.graph,
            &nodes,
            &inputs,
            &self.adapter,
            None,
            overrides,
        )?;
        debug!(computed = computed.len(), "subdag execution finished");
        Ok(computed)
    }

    /// Depth of every node in the graph.
    pub fn levels(&self) -> HashMap<String, usize> {
        let all: Vec<_> = self.graph.node_ids().collect();
        let sorted = topologically_sort_nodes(&*self.graph, &all);
        node_levels(&*self.graph, &sorted)
    }

    /// Nodes between the node called `end` and its ancestor matching
    /// `predicate`. See [`nodes_between`].
    pub fn path_between<P>(
        &self,
        end: &str,
        predicate: &P,
    ) -> Result<(Option<&Node<V>>, Vec<&Node<V>>)>
    where
        P: NodePredicate<V> + ?Sized,
    {
        let end = self
            .graph
            .id_of(end)
            .ok_or_else(|| SubdagError::UnknownNode(end.to_string()))?;
        let (start, between) = nodes_between(&*self.graph, end, predicate);
        Ok((
            start.map(|id| self.graph.node(id)),
            between.into_iter().map(|id| self.graph.node(id)).collect(),
        ))
    }
}
