// src/dag/builder.rs

//! Assembly of a closed, immutable [`FunctionGraph`].

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::dag::graph::FunctionGraph;
use crate::dag::node::{InputType, Node, NodeCallable, NodeId};
use crate::errors::{Result, SubdagError};

/// Declaration of a computation node, before names are resolved.
pub struct NodeSpec<V> {
    name: String,
    type_name: String,
    deps: Vec<(String, InputType)>,
    callable: Option<NodeCallable<V>>,
    tags: BTreeMap<String, String>,
    documentation: String,
}

impl<V> NodeSpec<V> {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            deps: Vec::new(),
            callable: None,
            tags: BTreeMap::new(),
            documentation: String::new(),
        }
    }

    /// Add a required dependency.
    pub fn dep(self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.dep_with(name, InputType::required(type_name))
    }

    /// Add an optional dependency.
    pub fn optional_dep(self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.dep_with(name, InputType::optional(type_name))
    }

    pub fn dep_with(mut self, name: impl Into<String>, input_type: InputType) -> Self {
        self.deps.push((name.into(), input_type));
        self
    }

    pub fn callable<F>(mut self, f: F) -> Self
    where
        F: Fn(&HashMap<String, V>) -> anyhow::Result<V> + Send + Sync + 'static,
    {
        self.callable = Some(Arc::new(f));
        self
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn doc(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }
}

enum Declared<V> {
    Input { type_name: String },
    Computation(NodeSpec<V>),
}

/// Collects node declarations and resolves them into a [`FunctionGraph`].
///
/// A dependency on a name that was never declared becomes an implicit
/// user-defined input carrying the dependency's declared type.
pub struct GraphBuilder<V> {
    declared: Vec<(String, Declared<V>)>,
}

impl<V> GraphBuilder<V> {
    pub fn new() -> Self {
        Self {
            declared: Vec::new(),
        }
    }

    /// Declare an explicit user-defined input.
    pub fn input(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.declared.push((
            name.into(),
            Declared::Input {
                type_name: type_name.into(),
            },
        ));
        self
    }

    /// Declare a computation node.
    pub fn node(mut self, spec: NodeSpec<V>) -> Self {
        self.declared
            .push((spec.name.clone(), Declared::Computation(spec)));
        self
    }

    /// Resolve names, create implicit inputs and fill in `depended_on_by`.
    ///
    /// Fails on duplicate names. Cycles are accepted.
    pub fn build(self) -> Result<FunctionGraph<V>> {
        let mut index: HashMap<String, NodeId> = HashMap::new();
        let mut nodes: Vec<Node<V>> = Vec::new();
        let mut pending_deps: Vec<Vec<(String, InputType)>> = Vec::new();

        // First pass: one arena slot per declared node.
        for (name, declared) in self.declared {
            if index.contains_key(&name) {
                return Err(SubdagError::DuplicateNode(name));
            }
            index.insert(name.clone(), NodeId(nodes.len()));

            let (node, deps) = match declared {
                Declared::Input { type_name } => (input_node(name, type_name), Vec::new()),
                Declared::Computation(spec) => {
                    let node = Node {
                        name,
                        type_name: spec.type_name,
                        user_defined: false,
                        dependencies: Vec::new(),
                        depended_on_by: Vec::new(),
                        input_types: BTreeMap::new(),
                        callable: spec.callable,
                        tags: spec.tags,
                        documentation: spec.documentation,
                    };
                    (node, spec.deps)
                }
            };
            nodes.push(node);
            pending_deps.push(deps);
        }

        // Second pass: resolve dependencies, creating implicit inputs as needed.
        for (slot, deps) in pending_deps.into_iter().enumerate() {
            let mut seen: HashSet<String> = HashSet::new();
            for (dep_name, input_type) in deps {
                if !seen.insert(dep_name.clone()) {
                    continue;
                }
                let dep_id = match index.get(&dep_name) {
                    Some(id) => *id,
                    None => {
                        debug!(node = %dep_name, "creating implicit input node");
                        let id = NodeId(nodes.len());
                        nodes.push(input_node(dep_name.clone(), input_type.type_name.clone()));
                        index.insert(dep_name.clone(), id);
                        id
                    }
                };
                let node = &mut nodes[slot];
                node.dependencies.push(dep_id);
                node.input_types.insert(dep_name, input_type);
            }
        }

        // Third pass: populate dependents based on deps.
        for slot in 0..nodes.len() {
            let deps = nodes[slot].dependencies.clone();
            for dep in deps {
                nodes[dep.0].depended_on_by.push(NodeId(slot));
            }
        }

        Ok(FunctionGraph { nodes, index })
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn input_node<V>(name: String, type_name: String) -> Node<V> {
    Node {
        name,
        type_name,
        user_defined: true,
        dependencies: Vec::new(),
        depended_on_by: Vec::new(),
        input_types: BTreeMap::new(),
        callable: None,
        tags: BTreeMap::new(),
        documentation: String::new(),
    }
}

