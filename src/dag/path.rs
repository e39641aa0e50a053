// src/dag/path.rs

//! Backward search from a node to an ancestor matching a predicate.

use std::collections::{HashMap, HashSet};

use crate::dag::graph::FunctionGraph;
use crate::dag::node::{Node, NodeId};

/// Condition identifying the ancestor a path search stops at.
pub trait NodePredicate<V> {
    fn matches(&self, node: &Node<V>) -> bool;
}

impl<V, F> NodePredicate<V> for F
where
    F: Fn(&Node<V>) -> bool,
{
    fn matches(&self, node: &Node<V>) -> bool {
        self(node)
    }
}

/// Matches a single node by name.
#[derive(Debug, Clone)]
pub struct NameIs(pub String);

impl<V> NodePredicate<V> for NameIs {
    fn matches(&self, node: &Node<V>) -> bool {
        node.name() == self.0
    }
}

/// Matches nodes carrying `key = value` in their tags.
#[derive(Debug, Clone)]
pub struct HasTag {
    pub key: String,
    pub value: String,
}

impl<V> NodePredicate<V> for HasTag {
    fn matches(&self, node: &Node<V>) -> bool {
        node.tag(&self.key) == Some(self.value.as_str())
    }
}

/// Outcome of visiting one node during the backward search.
///
/// `None` means no matching ancestor was found through this node; `Some`
/// carries the nodes collected on the way (possibly none, when the node was
/// already counted through another path).
type Reach = Option<Vec<NodeId>>;

struct Frame {
    node: NodeId,
    next_dep: usize,
    collected: Vec<NodeId>,
}

/// Find the ancestor of `end` matching `predicate` and every node lying on a
/// path between the two.
///
/// Returns `(start, between)`; both endpoints are excluded from `between`.
/// With no matching ancestor the result is `(None, [])`.
///
/// Known limitations:
/// - only one matching ancestor is expected; if several are reached the
///   last one in traversal order becomes `start`;
/// - the search does not descend past a matching node or a non-matching
///   user-defined node;
/// - cycles do not hang the search, but the result on a cyclic graph is not
///   meaningful.
pub fn nodes_between<V, P>(
    graph: &FunctionGraph<V>,
    end: NodeId,
    predicate: &P,
) -> (Option<NodeId>, Vec<NodeId>)
where
    P: NodePredicate<V> + ?Sized,
{
    let collected = PathSearch::new(graph, predicate).run(end).unwrap_or_default();

    let mut start = None;
    let mut between = Vec::new();
    let mut seen = HashSet::new();
    for id in collected {
        if predicate.matches(graph.node(id)) {
            start = Some(id);
        } else if id == end {
            continue;
        } else if seen.insert(id) {
            between.push(id);
        }
    }
    (start, between)
}

struct PathSearch<'a, V, P: ?Sized> {
    graph: &'a FunctionGraph<V>,
    predicate: &'a P,
    /// Visited nodes, with whether they reached a match.
    visited: HashMap<NodeId, bool>,
}

impl<'a, V, P> PathSearch<'a, V, P>
where
    P: NodePredicate<V> + ?Sized,
{
    fn new(graph: &'a FunctionGraph<V>, predicate: &'a P) -> Self {
        Self {
            graph,
            predicate,
            visited: HashMap::new(),
        }
    }

    /// Depth-first over dependencies with an explicit stack; visit order is
    /// the declared dependency order.
    fn run(&mut self, end: NodeId) -> Reach {
        let graph = self.graph;
        let mut stack = match self.enter(end) {
            Ok(reach) => return reach,
            Err(frame) => vec![frame],
        };

        loop {
            let Some(frame) = stack.last_mut() else {
                return None;
            };
            let deps = graph.dependencies_of(frame.node);

            if frame.next_dep < deps.len() {
                let dep = deps[frame.next_dep];
                frame.next_dep += 1;
                match self.enter(dep) {
                    Ok(reach) => absorb(frame, dep, reach),
                    Err(child) => stack.push(child),
                }
                continue;
            }

            // All dependencies handled: settle this frame.
            let Some(done) = stack.pop() else {
                return None;
            };
            let reach = if done.collected.is_empty() {
                None
            } else {
                Some(done.collected)
            };
            self.visited.insert(done.node, reach.is_some());

            match stack.last_mut() {
                Some(parent) => absorb(parent, done.node, reach),
                None => return reach,
            }
        }
    }

    /// Either resolve `node` immediately or hand back a frame to descend into.
    fn enter(&mut self, node: NodeId) -> Result<Reach, Frame> {
        if let Some(&reached) = self.visited.get(&node) {
            return Ok(reached.then(Vec::new));
        }
        // Marked before descending so a cycle back to this node terminates.
        self.visited.insert(node, false);

        let n = self.graph.node(node);
        if self.predicate.matches(n) {
            self.visited.insert(node, true);
            return Ok(Some(vec![node]));
        }
        if n.is_user_defined() {
            return Ok(None);
        }
        Err(Frame {
            node,
            next_dep: 0,
            collected: Vec::new(),
        })
    }
}

fn absorb(frame: &mut Frame, dep: NodeId, reach: Reach) {
    if let Some(nodes) = reach {
        frame.collected.extend(nodes);
        frame.collected.push(dep);
    }
}
