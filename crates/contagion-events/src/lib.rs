//! Shared report types and serialization for the opinion contagion simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the simulation core and for anything consuming its output.

pub mod record;
pub mod status;

// Re-export status types
pub use status::{HealthStatus, UnknownStatusCode};

// Re-export record types
pub use record::{ActorId, ActorRecord, AggregateRecord, TickRecord};
