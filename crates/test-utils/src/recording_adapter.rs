use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use subdag::{GraphAdapter, LocalAdapter, Node};

/// An adapter that:
/// - records which nodes were executed, and with which argument names
/// - delegates the actual computation to [`LocalAdapter`].
#[derive(Clone, Default)]
pub struct RecordingAdapter {
    executed: Arc<Mutex<Vec<String>>>,
    arguments: Arc<Mutex<HashMap<String, Vec<String>>>>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of executed nodes, in execution order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    /// Sorted argument names passed when executing `node`.
    pub fn arguments_of(&self, node: &str) -> Option<Vec<String>> {
        self.arguments.lock().unwrap().get(node).cloned()
    }
}

impl<V> GraphAdapter<V> for RecordingAdapter {
    fn execute_node(&self, node: &Node<V>, kwargs: &HashMap<String, V>) -> anyhow::Result<V> {
        {
            let mut guard = self.executed.lock().unwrap();
            guard.push(node.name().to_string());
        }
        {
            let mut names: Vec<String> = kwargs.keys().cloned().collect();
            names.sort();
            let mut guard = self.arguments.lock().unwrap();
            guard.insert(node.name().to_string(), names);
        }
        LocalAdapter.execute_node(node, kwargs)
    }
}
