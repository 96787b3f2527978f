//! Core application modules for download-cwlogs.
//!
//! # Module Organization
//!
//! - [`config`] - Immutable settings built from the command line
//! - [`data_plane`] - CloudWatch Logs client and the pagination loop
//! - [`csv_sink`] - CSV file output
//! - [`error`] - Error taxonomy and exit codes
//!
//! [`download`] ties them together: open the sink, write the header, stream
//! every page into it and flush.

pub mod config;
pub mod csv_sink;
pub mod data_plane;
pub mod error;

use aws_config::SdkConfig;
use tracing::info;

use config::DownloadConfig;
use csv_sink::CsvSink;
use data_plane::cloudwatch_logs::{
    load_aws_config, resolve_credentials, CloudWatchLogsClient, FetchSummary, LogEventsApi,
};
use data_plane::LogFetcher;
use error::DownloadError;

/// Download the configured stream through `api` into the configured CSV file
pub async fn download<A: LogEventsApi>(
    api: A,
    config: &DownloadConfig,
) -> Result<FetchSummary, DownloadError> {
    let fetcher = LogFetcher::new(api);

    let mut sink = CsvSink::create(&config.output_file)?;
    sink.write_header()?;

    let summary = fetcher
        .fetch_into(&config.log_group, &config.log_stream, &mut sink)
        .await?;
    sink.finish()?;

    if let Some((first, last)) = summary.time_range() {
        info!("Events span {} to {}", first, last);
    }
    info!(
        events = summary.events,
        pages = summary.pages,
        output = %config.output_file.display(),
        "Download complete"
    );

    Ok(summary)
}

/// Resolve AWS configuration and download from CloudWatch Logs
pub async fn run(config: &DownloadConfig) -> Result<FetchSummary, DownloadError> {
    info!(
        log_group = %config.log_group,
        log_stream = %config.log_stream,
        region = %config.region,
        "Starting download"
    );

    let aws_config = load_aws_config(&config.region).await?;
    run_with_aws_config(&aws_config, config).await
}

/// Download using an already loaded AWS configuration
///
/// Credentials are resolved before the output file is created, so a
/// configuration failure leaves no file behind.
pub async fn run_with_aws_config(
    aws_config: &SdkConfig,
    config: &DownloadConfig,
) -> Result<FetchSummary, DownloadError> {
    resolve_credentials(aws_config).await?;
    let client = CloudWatchLogsClient::new(aws_config);

    download(client, config).await
}
