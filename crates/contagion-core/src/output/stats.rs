//! Statistics Output
//!
//! Collects run-level statistics from tick records for analysis.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use contagion_events::{ActorId, AggregateRecord, TickRecord};

use crate::error::OutputError;
use crate::simulation::RunOutcome;

/// File name used inside the output directory
pub const STATS_FILE_NAME: &str = "stats.json";

/// Overall run statistics
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStats {
    pub seed: u64,
    pub total_ticks: u64,
    pub converged: bool,
    pub converged_at: Option<u64>,
    pub peak_infected: usize,
    pub peak_infected_tick: u64,
    pub peak_exposed: usize,
    /// Counters after the last tick
    pub final_aggregates: AggregateRecord,
    /// Ever-infected actors keyed by originator
    pub cascade_sizes: BTreeMap<ActorId, usize>,
}

/// Accumulates peaks across tick records
#[derive(Debug, Clone, Default)]
pub struct StatsCollector {
    ticks_seen: u64,
    peak_infected: usize,
    peak_infected_tick: u64,
    peak_exposed: usize,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the aggregates from one tick (or from the final state)
    pub fn record_aggregates(&mut self, tick: u64, aggregates: &AggregateRecord) {
        self.ticks_seen += 1;
        if aggregates.infected > self.peak_infected {
            self.peak_infected = aggregates.infected;
            self.peak_infected_tick = tick;
        }
        self.peak_exposed = self.peak_exposed.max(aggregates.exposed);
    }

    pub fn record_tick(&mut self, record: &TickRecord) {
        self.record_aggregates(record.tick, &record.aggregates);
    }

    pub fn ticks_seen(&self) -> u64 {
        self.ticks_seen
    }

    /// Generate final statistics
    pub fn generate_stats(
        &self,
        seed: u64,
        total_ticks: u64,
        outcome: &RunOutcome,
        final_aggregates: AggregateRecord,
        cascade_sizes: BTreeMap<ActorId, usize>,
    ) -> SimulationStats {
        SimulationStats {
            seed,
            total_ticks,
            converged: outcome.converged_at.is_some(),
            converged_at: outcome.converged_at,
            peak_infected: self.peak_infected,
            peak_infected_tick: self.peak_infected_tick,
            peak_exposed: self.peak_exposed,
            final_aggregates,
            cascade_sizes,
        }
    }
}

/// Write statistics as pretty JSON to `path`
pub fn write_stats(stats: &SimulationStats, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json)?;
    Ok(())
}
