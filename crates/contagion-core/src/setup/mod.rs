//! Simulation Setup
//!
//! Network loading from graph files.

pub mod graph;

pub use graph::*;
