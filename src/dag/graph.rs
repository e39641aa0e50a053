// src/dag/graph.rs

use std::collections::HashMap;

use crate::dag::node::{Node, NodeId};
use crate::errors::{Result, SubdagError};

/// Immutable node arena plus a name index.
///
/// Built once by [`GraphBuilder`](super::GraphBuilder); every traversal in
/// the crate reads from it and none of them mutate it. We do not check for
/// cycles here, see [`FunctionGraph::validate_acyclic`].
pub struct FunctionGraph<V> {
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) index: HashMap<String, NodeId>,
}

impl<V> FunctionGraph<V> {
    /// Look up a node by handle.
    ///
    /// Handles are only minted by the graph that owns them, so this indexes
    /// directly.
    pub fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.0]
    }

    pub fn get(&self, name: &str) -> Option<&Node<V>> {
        self.index.get(name).map(|id| self.node(*id))
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Resolve a list of names, failing on the first unknown one.
    pub fn ids_of<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<NodeId>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.id_of(name)
                    .ok_or_else(|| SubdagError::UnknownNode(name.to_string()))
            })
            .collect()
    }

    /// All node handles, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.iter()
    }

    /// Return all node names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.name.as_str())
    }

    /// Immediate dependencies of a node.
    pub fn dependencies_of(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).dependencies
    }

    /// Immediate dependents of a node.
    pub fn dependents_of(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).depended_on_by
    }

    /// User-defined nodes, i.e. everything the caller may supply.
    pub fn inputs(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.iter().filter(|n| n.user_defined)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<V> std::fmt::Debug for FunctionGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionGraph")
            .field("nodes", &self.nodes)
            .finish()
    }
}
