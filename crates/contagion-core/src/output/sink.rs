//! Reporting Sinks
//!
//! Collectors that receive one [`TickRecord`] per simulation step.

use contagion_events::TickRecord;

/// Receives the per-tick report.
pub trait ReportSink {
    /// Called once per tick, before any actor is activated.
    fn collect(&mut self, record: TickRecord);

    /// Whether per-actor records should be built for this sink.
    fn wants_actors(&self) -> bool {
        true
    }
}

/// In-memory collector of every record pushed so far
#[derive(Debug, Clone)]
pub struct MemoryCollector {
    records: Vec<TickRecord>,
    record_actors: bool,
}

impl MemoryCollector {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            record_actors: true,
        }
    }

    /// A collector that keeps aggregate counters only
    pub fn aggregates_only() -> Self {
        Self {
            records: Vec::new(),
            record_actors: false,
        }
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TickRecord> {
        self.records.last()
    }

    /// Takes every record collected so far
    pub fn drain(&mut self) -> Vec<TickRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl Default for MemoryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for MemoryCollector {
    fn collect(&mut self, record: TickRecord) {
        self.records.push(record);
    }

    fn wants_actors(&self) -> bool {
        self.record_actors
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn collect(&mut self, _record: TickRecord) {}

    fn wants_actors(&self) -> bool {
        false
    }
}

impl ReportSink for Vec<TickRecord> {
    fn collect(&mut self, record: TickRecord) {
        self.push(record);
    }
}
