#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

pub const DEFAULT_REGION: &str = "ap-northeast-1";
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Settings for one download, fixed once arguments are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    pub log_group: String,
    pub log_stream: String,
    pub region: String,
    pub output_file: PathBuf,
}

impl DownloadConfig {
    pub fn new(log_group: impl Into<String>, log_stream: impl Into<String>) -> Self {
        Self {
            log_group: log_group.into(),
            log_stream: log_stream.into(),
            region: DEFAULT_REGION.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }
}
