//! CSV output for downloaded log events.
//!
//! The file is created (or truncated) on [`CsvSink::create`]. Rows are
//! buffered by the `csv` writer; [`CsvSink::finish`] flushes and reports any
//! error, and dropping the sink on an error path still flushes what was
//! written so far.

#![warn(clippy::all, rust_2018_idioms)]

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::app::data_plane::cloudwatch_logs::{LogEvent, OutputRow};
use crate::app::error::DownloadError;

const HEADER: [&str; 2] = ["timestamp", "message"];

/// Destination for fetched events
pub trait EventSink {
    fn write_event(&mut self, event: &LogEvent) -> Result<(), DownloadError>;
}

pub struct CsvSink {
    path: PathBuf,
    writer: csv::Writer<File>,
    rows: usize,
}

impl CsvSink {
    /// Create or truncate the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DownloadError> {
        let path = path.as_ref().to_path_buf();
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(|e| DownloadError::file_system(&path, e))?;

        Ok(Self {
            path,
            writer,
            rows: 0,
        })
    }

    pub fn write_header(&mut self) -> Result<(), DownloadError> {
        self.writer
            .write_record(HEADER)
            .map_err(|e| DownloadError::file_system(&self.path, e))
    }

    pub fn write_row(&mut self, timestamp: &str, message: &str) -> Result<(), DownloadError> {
        self.write_data((timestamp, message))
    }

    /// Every data row goes through here so rows are counted once
    fn write_data(&mut self, row: impl Serialize) -> Result<(), DownloadError> {
        self.writer
            .serialize(row)
            .map_err(|e| DownloadError::file_system(&self.path, e))?;
        self.rows += 1;
        Ok(())
    }

    /// Flush buffered rows and close the file
    pub fn finish(mut self) -> Result<usize, DownloadError> {
        self.writer
            .flush()
            .map_err(|e| DownloadError::file_system(&self.path, e))?;
        Ok(self.rows)
    }
}

impl EventSink for CsvSink {
    fn write_event(&mut self, event: &LogEvent) -> Result<(), DownloadError> {
        self.write_data(OutputRow::from(event))
    }
}
