//! CLI module for validate-dataset
//!
//! Command definitions, console rendering, and the dispatcher that turns a
//! parsed command line into an [`ExitCode`].

pub mod commands;
pub mod output;

pub use commands::{DatasetCli, DatasetCommands};

use std::io::Write;
use std::time::Duration;

use crate::error::ValidationError;
use crate::validation::{Invocation, ValidationOutcome};

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed and, for `validate`, the metadata conforms
    Success = 0,
    /// Validation failed, the result was unexpected, or the run hit an error
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a validation outcome
    pub fn from_outcome(outcome: &ValidationOutcome) -> Self {
        if outcome.is_success() {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

/// Report a command-line parsing error and pick the exit code
///
/// `--help` and `--version` arrive here as well and go to `out` with a
/// success code. An unknown subcommand gets the short invalid-command
/// message; every other parse error is rendered by clap.
pub fn report_parse_error(
    error: &clap::Error,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
) -> ExitCode {
    use clap::error::ErrorKind;
    use colored::Colorize;

    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write!(out, "{}", error.render()).ok();
            ExitCode::Success
        }
        ErrorKind::InvalidSubcommand => {
            writeln!(err_out, "{}", output::INVALID_COMMAND.red()).ok();
            ExitCode::Failure
        }
        _ => {
            write!(err_out, "{}", error.render()).ok();
            ExitCode::Failure
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub async fn run(cli: DatasetCli, out: &mut dyn Write) -> Result<ExitCode, ValidationError> {
    match cli.command {
        DatasetCommands::Validate {
            file,
            validation_type,
            domain,
        } => {
            let invocation = Invocation::new(file, domain, validation_type);
            let timeout = cli.timeout.map(Duration::from_secs);
            commands::execute_validate(out, invocation, &cli.endpoint, timeout).await
        }
        DatasetCommands::Info => commands::execute_info(out),
    }
}
