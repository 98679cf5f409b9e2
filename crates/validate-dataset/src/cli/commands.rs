//! CLI command definitions for validate-dataset
//!
//! Clap-based definitions for the `validate` and `info` commands and the
//! global options that configure the validator client.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use super::output;
use super::ExitCode;
use crate::client::{ItbClientBuilder, DEFAULT_BASE_URL};
use crate::error::ValidationError;
use crate::profile::{Domain, ValidationType};
use crate::validation::{self, Invocation};

/// Validate dataset metadata files to ensure they meet catalog standards
#[derive(Parser, Debug)]
#[command(name = "validate-dataset")]
#[command(about = "Validate dataset metadata files to ensure they meet catalog standards", long_about = None)]
#[command(version)]
pub struct DatasetCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the SHACL validator
    #[arg(
        long,
        global = true,
        env = "VALIDATE_DATASET_ENDPOINT",
        default_value = DEFAULT_BASE_URL
    )]
    pub endpoint: String,

    /// Request timeout in seconds, at least 1 (no timeout when unset)
    #[arg(
        long,
        global = true,
        env = "VALIDATE_DATASET_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: DatasetCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum DatasetCommands {
    /// Validate a dataset metadata file
    #[command(visible_alias = "v")]
    Validate {
        /// Path to the metadata file to validate
        file: PathBuf,

        /// Validation profile type
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValidationType::V2_0_0)]
        validation_type: ValidationType,

        /// Validation domain
        #[arg(short, long, value_enum, default_value_t = Domain::Healthri)]
        domain: Domain,
    },

    /// Show information about validation profiles and domains
    #[command(visible_alias = "i")]
    Info,
}

/// Execute the validate command
pub async fn execute_validate(
    out: &mut dyn Write,
    invocation: Invocation,
    endpoint: &str,
    timeout: Option<Duration>,
) -> Result<ExitCode, ValidationError> {
    output::render_banner(out, &invocation)?;

    let client = ItbClientBuilder::new()
        .base_url(endpoint)
        .timeout(timeout)
        .build()?;

    let outcome = validation::validate(&client, &invocation).await?;
    output::render_outcome(out, &outcome)?;

    Ok(ExitCode::from_outcome(&outcome))
}

/// Execute the info command
pub fn execute_info(out: &mut dyn Write) -> Result<ExitCode, ValidationError> {
    output::render_info(out)?;
    Ok(ExitCode::Success)
}
