// src/dag/node.rs

//! Node model shared by every traversal.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Opaque computation attached to a node.
///
/// Only execution adapters call this; the traversal code never does.
pub type NodeCallable<V> = Arc<dyn Fn(&HashMap<String, V>) -> anyhow::Result<V> + Send + Sync>;

/// Handle to a node inside its owning [`FunctionGraph`](super::FunctionGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the graph arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a dependency edge must be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DependencyType {
    /// Missing values fail the execution.
    #[default]
    Required,
    /// Missing values are skipped and left out of the callable's arguments.
    Optional,
}

/// Declared type and kind of one dependency edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputType {
    pub type_name: String,
    pub dependency: DependencyType,
}

impl InputType {
    pub fn required(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            dependency: DependencyType::Required,
        }
    }

    pub fn optional(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            dependency: DependencyType::Optional,
        }
    }
}

/// A vertex of the graph: either an externally supplied input or a
/// computation over its dependencies.
///
/// Nodes are created by [`GraphBuilder`](super::GraphBuilder) and never
/// mutated afterwards.
pub struct Node<V> {
    pub(crate) name: String,
    pub(crate) type_name: String,
    pub(crate) user_defined: bool,
    /// Direct dependencies, in declaration order.
    pub(crate) dependencies: Vec<NodeId>,
    /// Transpose of `dependencies`; a lookup index only.
    pub(crate) depended_on_by: Vec<NodeId>,
    pub(crate) input_types: BTreeMap<String, InputType>,
    pub(crate) callable: Option<NodeCallable<V>>,
    pub(crate) tags: BTreeMap<String, String>,
    pub(crate) documentation: String,
}

impl<V> Node<V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared output type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// `true` if the value comes from the caller rather than a computation.
    pub fn is_user_defined(&self) -> bool {
        self.user_defined
    }

    pub fn dependencies(&self) -> &[NodeId] {
        &self.dependencies
    }

    pub fn depended_on_by(&self) -> &[NodeId] {
        &self.depended_on_by
    }

    pub fn input_types(&self) -> &BTreeMap<String, InputType> {
        &self.input_types
    }

    /// Kind of the edge from this node to the dependency called `dep_name`.
    ///
    /// Edges without a declared type are treated as required.
    pub fn dependency_type(&self, dep_name: &str) -> DependencyType {
        self.input_types
            .get(dep_name)
            .map(|t| t.dependency)
            .unwrap_or_default()
    }

    pub fn callable(&self) -> Option<&NodeCallable<V>> {
        self.callable.as_ref()
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }
}

impl<V> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("user_defined", &self.user_defined)
            .field("dependencies", &self.dependencies)
            .field("depended_on_by", &self.depended_on_by)
            .field("input_types", &self.input_types)
            .field("has_callable", &self.callable.is_some())
            .field("tags", &self.tags)
            .finish()
    }
}
