// src/exec/adapter.rs

//! Pluggable execution adapter abstraction.
//!
//! The subdag executor never calls a node's callable itself. It hands the
//! node and its resolved arguments to a `GraphAdapter`, which may run the
//! computation in-process, hand it to a worker pool, or ship it elsewhere.
//!
//! - [`LocalAdapter`] is the default: it calls the node's callable on the
//!   current thread.
//! - Tests can provide their own adapter that, for example, records which
//!   nodes were executed.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;

use crate::dag::Node;

/// Capability that actually computes a node given its dependency values.
pub trait GraphAdapter<V> {
    /// Compute `node` from `kwargs`, keyed by dependency name.
    ///
    /// Optional dependencies that were not available are absent from
    /// `kwargs`. Any error is passed back to the caller of the executor
    /// untouched.
    fn execute_node(&self, node: &Node<V>, kwargs: &HashMap<String, V>) -> anyhow::Result<V>;
}

impl<V, A: GraphAdapter<V> + ?Sized> GraphAdapter<V> for &A {
    fn execute_node(&self, node: &Node<V>, kwargs: &HashMap<String, V>) -> anyhow::Result<V> {
        (**self).execute_node(node, kwargs)
    }
}

impl<V, A: GraphAdapter<V> + ?Sized> GraphAdapter<V> for Box<A> {
    fn execute_node(&self, node: &Node<V>, kwargs: &HashMap<String, V>) -> anyhow::Result<V> {
        (**self).execute_node(node, kwargs)
    }
}

impl<V, A: GraphAdapter<V> + ?Sized> GraphAdapter<V> for Arc<A> {
    fn execute_node(&self, node: &Node<V>, kwargs: &HashMap<String, V>) -> anyhow::Result<V> {
        (**self).execute_node(node, kwargs)
    }
}

/// In-process adapter: calls the node's callable directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAdapter;

impl<V> GraphAdapter<V> for LocalAdapter {
    fn execute_node(&self, node: &Node<V>, kwargs: &HashMap<String, V>) -> anyhow::Result<V> {
        let callable = node
            .callable()
            .ok_or_else(|| anyhow!("node '{}' has no callable attached", node.name()))?;
        callable(kwargs)
    }
}
