//! download-cwlogs - Download a CloudWatch Logs stream to CSV
//!
//! Reads every event of one log stream, oldest first, by paging through
//! `GetLogEvents` with forward tokens, and writes a `timestamp,message` CSV.
//!
//! # Architecture Overview
//!
//! - **CLI** ([`cli`]): clap arguments, converted once into an immutable
//!   [`app::config::DownloadConfig`]
//! - **Integration Layer** ([`app::data_plane::cloudwatch_logs`]): AWS SDK client behind the
//!   [`app::data_plane::cloudwatch_logs::LogEventsApi`] trait, and the pagination loop in
//!   [`app::data_plane::cloudwatch_logs::LogFetcher`]
//! - **Output** ([`app::csv_sink`]): CSV file sink
//!
//! The pagination loop stops when the service answers with the same forward
//! token the request carried. Any error ends the run; nothing is retried.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod cli;

pub use app::config::DownloadConfig;
pub use app::error::DownloadError;
pub use app::{download, run, run_with_aws_config};
