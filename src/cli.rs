//! Command line arguments.
//!
//! | Option | Short | Default | Description |
//! |--------|-------|---------|-------------|
//! | `--log-group` | `-g` | required | Log group name |
//! | `--log-stream` | `-s` | required | Log stream name |
//! | `--region` | `-r` | `ap-northeast-1` | AWS region |
//! | `--output-file` | `-o` | `output.csv` | Output file name |

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

use crate::app::config::{DownloadConfig, DEFAULT_OUTPUT_FILE, DEFAULT_REGION};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT"), ")");

/// Download every event of a CloudWatch Logs stream into a CSV file
#[derive(Debug, Parser)]
#[command(name = "download-cwlogs", version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Log Group Name
    #[arg(short = 'g', long, value_parser = NonEmptyStringValueParser::new())]
    pub log_group: String,

    /// Log Stream Name
    #[arg(short = 's', long, value_parser = NonEmptyStringValueParser::new())]
    pub log_stream: String,

    /// AWS Region
    #[arg(short = 'r', long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Output file name
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,
}

impl From<Cli> for DownloadConfig {
    fn from(cli: Cli) -> Self {
        DownloadConfig::new(cli.log_group, cli.log_stream)
            .with_region(cli.region)
            .with_output_file(cli.output_file)
    }
}
