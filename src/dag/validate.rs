// src/dag/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::FunctionGraph;
use crate::errors::{Result, SubdagError};

impl<V> FunctionGraph<V> {
    /// Optional structural check: fail if the node set contains a cycle.
    ///
    /// None of the traversals call this. They silently produce partial
    /// results on cyclic input, so callers that want a diagnostic run this
    /// once after building the graph.
    pub fn validate_acyclic(&self) -> Result<()> {
        // Edge direction: dependency -> dependent.
        let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();

        for id in self.node_ids() {
            graph.add_node(id.index());
        }

        for id in self.node_ids() {
            for dep in self.dependencies_of(id) {
                graph.add_edge(dep.index(), id.index(), ());
            }
        }

        // A topological sort will fail if there is a cycle.
        match toposort(&graph, None) {
            Ok(_order) => Ok(()),
            Err(cycle) => {
                let name = &self.nodes[cycle.node_id()].name;
                Err(SubdagError::DagCycle(format!(
                    "cycle detected in node graph involving node '{}'",
                    name
                )))
            }
        }
    }
}
