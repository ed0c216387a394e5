//! Report Writer
//!
//! Append-only JSONL output of tick records.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use contagion_events::TickRecord;

use crate::error::OutputError;

/// File name used inside the output directory
pub const TICKS_FILE_NAME: &str = "ticks.jsonl";

/// Writes tick records to a JSONL file
pub struct ReportWriter {
    writer: BufWriter<File>,
    record_actors: bool,
    record_count: u64,
}

impl ReportWriter {
    /// Create a writer truncating the file at `path`
    pub fn new(path: impl AsRef<Path>, record_actors: bool) -> Result<Self, OutputError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            record_actors,
            record_count: 0,
        })
    }

    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Write one record, stripping per-actor fields unless enabled
    pub fn write(&mut self, record: &TickRecord) -> Result<(), OutputError> {
        let line = if self.record_actors {
            record.to_jsonl()?
        } else {
            record.without_actors().to_jsonl()?
        };
        writeln!(self.writer, "{}", line)?;
        self.record_count += 1;
        Ok(())
    }

    pub fn write_batch(&mut self, records: &[TickRecord]) -> Result<(), OutputError> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for ReportWriter {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush report writer: {}", e);
        }
    }
}
