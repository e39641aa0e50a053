// src/config/mod.rs

//! Configuration for graph executions.
//!
//! - Load a config mapping from a TOML file (`loader.rs`).
//! - Merge it with runtime inputs, rejecting overlaps (`merge.rs`).

pub mod loader;
pub mod merge;

pub use loader::{default_config_path, load_from_path, parse_config};
pub use merge::combine_config_and_inputs;
