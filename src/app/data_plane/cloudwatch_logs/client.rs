//! CloudWatch Logs Client Wrapper
//!
//! Wraps the SDK's `GetLogEvents` call behind [`LogEventsApi`] so the
//! pagination loop can run against the real service or a scripted fake.

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudwatchlogs as cloudwatchlogs;
use aws_types::region::Region;
use tracing::debug;

use crate::app::error::DownloadError;

use super::types::{FetchRequest, FetchResponse, LogEvent};

/// The one CloudWatch Logs operation the downloader needs
#[async_trait]
pub trait LogEventsApi {
    /// Issue a single `GetLogEvents` call
    async fn get_log_events(&self, request: &FetchRequest) -> Result<FetchResponse>;
}

#[async_trait]
impl<T: LogEventsApi + Sync + ?Sized> LogEventsApi for &T {
    async fn get_log_events(&self, request: &FetchRequest) -> Result<FetchResponse> {
        (**self).get_log_events(request).await
    }
}

/// Load AWS configuration for `region` from the default provider chain
pub async fn load_aws_config(region: &str) -> Result<SdkConfig, DownloadError> {
    if region.trim().is_empty() {
        return Err(DownloadError::Config("region must not be empty".to_string()));
    }

    Ok(aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await)
}

/// Resolve credentials from `aws_config` now instead of on the first request
///
/// The default chain is always installed, so only asking it for credentials
/// tells whether any source (environment, profile, instance role) has them.
pub async fn resolve_credentials(aws_config: &SdkConfig) -> Result<(), DownloadError> {
    let provider = aws_config
        .credentials_provider()
        .ok_or_else(|| DownloadError::Config("no AWS credentials provider configured".to_string()))?;

    provider.provide_credentials().await.map_err(|e| {
        DownloadError::Config(format!("unable to resolve AWS credentials: {}", e))
    })?;

    debug!("Resolved AWS credentials");
    Ok(())
}

/// CloudWatch Logs client wrapper
#[derive(Clone, Debug)]
pub struct CloudWatchLogsClient {
    client: cloudwatchlogs::Client,
}

impl CloudWatchLogsClient {
    /// Create a new CloudWatch Logs client wrapper
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self {
            client: cloudwatchlogs::Client::new(aws_config),
        }
    }
}

#[async_trait]
impl LogEventsApi for CloudWatchLogsClient {
    async fn get_log_events(&self, request: &FetchRequest) -> Result<FetchResponse> {
        debug!(
            log_group = %request.log_group_name,
            log_stream = %request.log_stream_name,
            token = request.sent_token(),
            "GetLogEvents"
        );

        let response = self
            .client
            .get_log_events()
            .log_group_name(&request.log_group_name)
            .log_stream_name(&request.log_stream_name)
            .start_from_head(request.start_from_head)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to get log events from {}/{}",
                    request.log_group_name, request.log_stream_name
                )
            })?;

        // Convert response to our types
        let events = response
            .events
            .unwrap_or_default()
            .into_iter()
            .map(|event| {
                LogEvent::new(
                    event.timestamp.unwrap_or(0),
                    event.message.unwrap_or_default(),
                )
            })
            .collect();

        Ok(FetchResponse {
            events,
            next_forward_token: response.next_forward_token,
        })
    }
}
