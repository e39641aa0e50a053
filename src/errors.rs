// src/errors.rs

//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubdagError {
    /// Config and runtime inputs share keys. Carries every offending key.
    #[error(
        "The following inputs are present in both config and inputs. \
         They must be mutually disjoint: {keys:?}"
    )]
    KeyCollision { keys: Vec<String> },

    /// A user-defined node reached through a required edge had no input value.
    #[error("{node} was expected to be passed in but was not")]
    MissingRequiredInput { node: String },

    /// The execution adapter failed while computing a node.
    ///
    /// `source` is the adapter's error, untouched.
    #[error("node {node} encountered an error")]
    NodeExecution {
        node: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),

    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SubdagError {
    /// The adapter error behind a [`SubdagError::NodeExecution`], if any.
    pub fn execution_source(&self) -> Option<&anyhow::Error> {
        match self {
            SubdagError::NodeExecution { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubdagError>;
