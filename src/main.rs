#![warn(clippy::all, rust_2018_idioms)]

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;

use download_cwlogs::cli::Cli;
use download_cwlogs::DownloadConfig;

const DEFAULT_LOG_FILTER: &str = "download_cwlogs=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn";

fn init_logging() {
    // RUST_LOG overrides the default directives
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn main() -> ExitCode {
    // Usage errors exit here, before any file or network access
    let cli = Cli::parse();
    init_logging();

    let config = DownloadConfig::from(cli);

    // One request at a time on the current thread
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime, {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(download_cwlogs::run(&config)) {
        Ok(summary) => {
            println!(
                "Downloaded {} events in {} pages to {}",
                summary.events,
                summary.pages,
                config.output_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
