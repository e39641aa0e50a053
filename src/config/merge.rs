// src/config/merge.rs

use std::collections::HashMap;

use crate::errors::{Result, SubdagError};

/// Combine config and runtime inputs into a single input mapping.
///
/// The two must be disjoint; otherwise every key present in both is
/// reported (sorted) in a [`SubdagError::KeyCollision`].
pub fn combine_config_and_inputs<V>(
    config: HashMap<String, V>,
    inputs: HashMap<String, V>,
) -> Result<HashMap<String, V>> {
    let mut duplicated: Vec<String> = inputs
        .keys()
        .filter(|key| config.contains_key(*key))
        .cloned()
        .collect();

    if !duplicated.is_empty() {
        duplicated.sort();
        return Err(SubdagError::KeyCollision { keys: duplicated });
    }

    let mut combined = config;
    combined.extend(inputs);
    Ok(combined)
}
