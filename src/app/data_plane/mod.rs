//! Data Plane Services Module
//!
//! AWS data plane integrations: calls that read data held inside a resource
//! rather than describing the resource itself.
//!
//! ## Available Services
//!
//! - **CloudWatch Logs**: Read every event of a log stream

pub mod cloudwatch_logs;

pub use cloudwatch_logs::{CloudWatchLogsClient, LogFetcher};
