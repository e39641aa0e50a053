// src/exec/mod.rs

//! Execution layer.
//!
//! - [`subdag`] walks the graph and decides what to compute, in which order,
//!   and with which arguments.
//! - [`adapter`] provides the `GraphAdapter` trait through which every
//!   computation is actually run, and the in-process `LocalAdapter`.

pub mod adapter;
pub mod subdag;

pub use adapter::{GraphAdapter, LocalAdapter};
pub use subdag::execute_subdag;
