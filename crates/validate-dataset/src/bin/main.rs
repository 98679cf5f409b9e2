//! validate-dataset CLI
//!
//! # Usage
//!
//! ```bash
//! validate-dataset validate metadata.ttl --domain healthri --type v2.0.0
//! validate-dataset info
//! ```
//!
//! # Exit Codes
//!
//! - 0: Validation passed, or `info`/`--help`/`--version`
//! - 1: Validation failed, unexpected result, missing file, unreachable
//!   service, or invalid command line

use clap::Parser;
use tracing::Level;
use validate_dataset::{report_parse_error, run_cli, DatasetCli};

#[tokio::main]
async fn main() {
    let cli = match DatasetCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let exit_code = report_parse_error(&e, &mut std::io::stdout(), &mut std::io::stderr());
            std::process::exit(exit_code.into());
        }
    };

    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level(cli.verbose).into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run_cli(cli, &mut std::io::stdout(), &mut std::io::stderr()).await;
    std::process::exit(exit_code.into());
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
