//! Output
//!
//! Reporting sinks, JSONL report writing and run statistics.

pub mod sink;
pub mod stats;
pub mod writer;

pub use sink::{MemoryCollector, NullSink, ReportSink};
pub use stats::{write_stats, SimulationStats, StatsCollector, STATS_FILE_NAME};
pub use writer::{ReportWriter, TICKS_FILE_NAME};
