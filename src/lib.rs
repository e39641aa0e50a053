// src/lib.rs

//! Dependency-graph execution engine.
//!
//! A [`FunctionGraph`] is a closed set of nodes, each either an externally
//! supplied input or a computation over its dependencies. On top of it the
//! crate provides:
//! - topological ordering and node levels ([`dag::order`])
//! - memoized depth-first execution of the subgraph needed for a set of
//!   requested nodes, with inputs and overrides ([`exec::subdag`])
//! - backward search for the nodes between a node and a matching ancestor
//!   ([`dag::path`])
//! - merging of config and runtime inputs ([`config::merge`])
//!
//! The actual computation of a node is delegated to a [`GraphAdapter`].

pub mod config;
pub mod dag;
pub mod driver;
pub mod errors;
pub mod exec;
pub mod logging;

pub use config::combine_config_and_inputs;
pub use dag::{
    DependencyType, FunctionGraph, GraphBuilder, InputType, Node, NodeId, NodePredicate, NodeSpec,
    node_levels, nodes_between, topologically_sort_nodes,
};
pub use driver::Driver;
pub use errors::{Result, SubdagError};
pub use exec::{GraphAdapter, LocalAdapter, execute_subdag};
