// src/config/loader.rs

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{Result, SubdagError};

/// Load a config mapping from a TOML file.
///
/// Every top-level key becomes one entry, deserialized into `V`:
///
/// ```toml
/// region = "eu"
/// batch_size = 64
/// ```
///
/// Nested tables are fine as long as `V` can represent them (e.g.
/// `toml::Value`).
pub fn load_from_path<V>(path: impl AsRef<Path>) -> Result<HashMap<String, V>>
where
    V: DeserializeOwned,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), keys = config.len(), "loaded config");
    Ok(config)
}

/// Parse a config mapping from TOML text.
pub fn parse_config<V>(contents: &str) -> Result<HashMap<String, V>>
where
    V: DeserializeOwned,
{
    let config: HashMap<String, V> = toml::from_str(contents)?;

    if let Some(empty) = config.keys().find(|k| k.trim().is_empty()) {
        return Err(SubdagError::ConfigError(format!(
            "config keys must not be blank (got {:?})",
            empty
        )));
    }

    Ok(config)
}

/// Default config location: `subdag.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("subdag.toml")
}
