//! Opinion Contagion Simulation Engine Library
//!
//! Joint SEIR-style contagion and bounded-confidence opinion dynamics on a
//! fixed social network.

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::Config;
pub use error::{ConfigError, GraphLoadError, OutputError, SetupError};
pub use simulation::{RunOutcome, Simulation};

// Re-export setup functions explicitly to avoid module name conflicts
pub use setup::{load_network, parse_network};
