// src/dag/mod.rs

//! Node graph representation and the read-only traversals over it.
//!
//! - [`node`] defines the vertex type and dependency kinds.
//! - [`graph`] holds the immutable node arena.
//! - [`builder`] resolves declarations into a closed graph.
//! - [`order`] computes topological order and node levels.
//! - [`path`] searches backwards for the nodes between two points.
//! - [`validate`] provides the optional acyclicity check.

pub mod builder;
pub mod graph;
pub mod node;
pub mod order;
pub mod path;
pub mod validate;

pub use builder::{GraphBuilder, NodeSpec};
pub use graph::FunctionGraph;
pub use node::{DependencyType, InputType, Node, NodeCallable, NodeId};
pub use order::{node_levels, topologically_sort_nodes};
pub use path::{HasTag, NameIs, NodePredicate, nodes_between};
