//! CloudWatch Logs Integration Module
//!
//! Pages through a single log stream with `GetLogEvents`, oldest event first.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use download_cwlogs::app::csv_sink::CsvSink;
//! use download_cwlogs::app::data_plane::cloudwatch_logs::{
//!     load_aws_config, resolve_credentials, CloudWatchLogsClient, LogFetcher,
//! };
//!
//! # async fn example() -> Result<(), download_cwlogs::app::error::DownloadError> {
//! let aws_config = load_aws_config("ap-northeast-1").await?;
//! resolve_credentials(&aws_config).await?;
//! let fetcher = LogFetcher::new(CloudWatchLogsClient::new(&aws_config));
//!
//! let mut sink = CsvSink::create("output.csv")?;
//! sink.write_header()?;
//! let summary = fetcher
//!     .fetch_into("/aws/lambda/my-function", "2024/01/01/[$LATEST]abc", &mut sink)
//!     .await?;
//! sink.finish()?;
//!
//! println!("{} events in {} pages", summary.events, summary.pages);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod client;
pub mod fetcher;
pub mod types;

// Re-export commonly used types
pub use client::{load_aws_config, resolve_credentials, CloudWatchLogsClient, LogEventsApi};
pub use fetcher::{LogEventPages, LogFetcher};
pub use types::{FetchRequest, FetchResponse, FetchSummary, LogEvent, OutputRow};
