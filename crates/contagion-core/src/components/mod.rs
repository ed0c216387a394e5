//! Simulation Components
//!
//! Actor state, shared counters, model parameters and the network.

pub mod actor;
pub mod counters;
pub mod network;
pub mod params;

pub use actor::*;
pub use counters::*;
pub use network::*;
pub use params::*;
