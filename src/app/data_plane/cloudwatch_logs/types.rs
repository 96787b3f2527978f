//! CloudWatch Logs Data Types
//!
//! Requests, responses and events exchanged with `GetLogEvents`.

#![warn(clippy::all, rust_2018_idioms)]

use chrono::DateTime;
use serde::Serialize;

/// Parameters of a single `GetLogEvents` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Log group that owns the stream
    pub log_group_name: String,
    /// Stream to read
    pub log_stream_name: String,
    /// Always true: events are read oldest first
    pub start_from_head: bool,
    /// Forward token to resume from (None on the first call)
    pub next_token: Option<String>,
}

impl FetchRequest {
    /// Create a request positioned at the head of the stream
    pub fn new(log_group_name: impl Into<String>, log_stream_name: impl Into<String>) -> Self {
        Self {
            log_group_name: log_group_name.into(),
            log_stream_name: log_stream_name.into(),
            start_from_head: true,
            next_token: None,
        }
    }

    /// Token that will be sent, with an absent token read as empty
    pub fn sent_token(&self) -> &str {
        self.next_token.as_deref().unwrap_or_default()
    }
}

/// One page returned by `GetLogEvents`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResponse {
    /// Events in the order the service delivered them
    pub events: Vec<LogEvent>,
    /// Cursor positioned after the last delivered event
    pub next_forward_token: Option<String>,
}

impl FetchResponse {
    pub fn new(events: Vec<LogEvent>, next_forward_token: impl Into<String>) -> Self {
        Self {
            events,
            next_forward_token: Some(next_forward_token.into()),
        }
    }
}

/// A single log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Event timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Log message content
    pub message: String,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

/// A CSV data row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow<'a> {
    pub timestamp: String,
    pub message: &'a str,
}

impl<'a> From<&'a LogEvent> for OutputRow<'a> {
    fn from(event: &'a LogEvent) -> Self {
        Self {
            timestamp: event.timestamp.to_string(),
            message: &event.message,
        }
    }
}

/// Totals for a completed download
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Number of `GetLogEvents` calls issued
    pub pages: usize,
    /// Number of events emitted to the sink
    pub events: usize,
    /// Timestamp of the first event seen
    pub first_timestamp: Option<i64>,
    /// Timestamp of the last event seen
    pub last_timestamp: Option<i64>,
}

impl FetchSummary {
    /// Account for one received page
    pub fn record_page(&mut self, events: &[LogEvent]) {
        self.pages += 1;
        self.events += events.len();
        if let Some(first) = events.first() {
            self.first_timestamp.get_or_insert(first.timestamp);
        }
        if let Some(last) = events.last() {
            self.last_timestamp = Some(last.timestamp);
        }
    }

    /// Covered time range as RFC 3339 strings
    pub fn time_range(&self) -> Option<(String, String)> {
        let first = DateTime::from_timestamp_millis(self.first_timestamp?)?;
        let last = DateTime::from_timestamp_millis(self.last_timestamp?)?;
        Some((first.to_rfc3339(), last.to_rfc3339()))
    }
}
