//! Tick Records
//!
//! Serialization structs for the per-tick report pushed to reporting sinks.
//!
//! A record captures the state resulting from the previous tick: it is taken
//! before the current tick's actors are activated.

use serde::{Deserialize, Serialize};

use crate::HealthStatus;

/// Node identifier. Ids are dense: a network of `n` nodes uses `0..n`.
pub type ActorId = usize;

/// Aggregate counters at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Actors that have ever been Exposed or Infected
    pub consumers: usize,
    /// Actors that have ever been Infected
    pub spreaders: usize,
    pub exposed: usize,
    pub infected: usize,
    pub recovered: usize,
    pub susceptible: usize,
    /// Actors with belief <= 0.4
    pub leftist: usize,
    /// Actors with belief >= 0.6
    pub rightist: usize,
}

impl AggregateRecord {
    /// Sum of the current-state counters.
    pub fn population(&self) -> usize {
        self.susceptible + self.exposed + self.infected + self.recovered
    }
}

/// Per-actor fields reported each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRecord {
    pub id: ActorId,
    pub status: HealthStatus,
    pub opinion: f64,
    pub extremeness: f64,
    pub influence: f64,
}

/// Everything reported for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub aggregates: AggregateRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actors: Vec<ActorRecord>,
}

impl TickRecord {
    /// Drops the per-actor records, keeping only aggregates.
    pub fn without_actors(&self) -> Self {
        Self {
            tick: self.tick,
            aggregates: self.aggregates,
            actors: Vec::new(),
        }
    }

    /// Serializes the record to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
