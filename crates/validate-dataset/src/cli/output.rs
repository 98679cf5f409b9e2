//! Console rendering for validate-dataset
//!
//! Every renderer writes to a caller-supplied writer so the binary can target
//! stdout/stderr and tests can capture plain text. Colors come from
//! `colored` and follow its global override (`NO_COLOR`, non-tty, tests).

use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};

use crate::error::ValidationError;
use crate::profile::{Domain, ValidationType};
use crate::validation::{Invocation, ValidationOutcome};

/// Message printed when the dispatcher gets a command it does not know
pub const INVALID_COMMAND: &str = "Invalid command. Use --help to see available commands.";

/// Print the header shown before a validation request is sent
pub fn render_banner(out: &mut dyn Write, invocation: &Invocation) -> io::Result<()> {
    writeln!(out, "{}", "🔍 Validating dataset metadata...".blue())?;
    writeln!(
        out,
        "{}",
        format!("File: {}", invocation.file.display()).bright_black()
    )?;
    writeln!(
        out,
        "{}",
        format!("Profile: {}", invocation.profile).bright_black()
    )?;
    writeln!(out)?;
    Ok(())
}

/// Print the verdict of a validation exchange
pub fn render_outcome(out: &mut dyn Write, outcome: &ValidationOutcome) -> io::Result<()> {
    match outcome {
        ValidationOutcome::Success => {
            writeln!(
                out,
                "{}",
                "✅ Validation passed! Your dataset metadata meets the required standards."
                    .green()
            )?;
        }
        ValidationOutcome::Failure { errors } => {
            writeln!(
                out,
                "{}",
                "❌ Validation failed. Your dataset metadata has issues that need to be addressed."
                    .red()
            )?;
            writeln!(out, "🔧 Issues found:")?;
            for (index, error) in errors.iter().enumerate() {
                writeln!(
                    out,
                    "{}",
                    format!("  {}. {}", index + 1, format_error_entry(error)).red()
                )?;
            }
        }
        ValidationOutcome::Unexpected { body } => {
            writeln!(
                out,
                "{}",
                "⚠️  Validation completed with unexpected result.".yellow()
            )?;
            writeln!(out, "Response: {}", body)?;
        }
    }
    out.flush()
}

/// Print the static profile reference table
pub fn render_info(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", "📚 Available Validation Profiles:".blue())?;
    writeln!(out)?;

    writeln!(out, "{}", "Domains:".yellow())?;
    for domain in Domain::ALL {
        writeln!(out, "  • {:<8} - {}", domain.as_str(), domain.description())?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "Types:".yellow())?;
    for validation_type in ValidationType::ALL {
        writeln!(
            out,
            "  • {:<12}- {}",
            validation_type.as_str(),
            validation_type.description()
        )?;
    }
    writeln!(out)?;
    out.flush()
}

/// Print an error that ended the run
pub fn render_error(out: &mut dyn Write, error: &ValidationError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())?;
    out.flush()
}

/// Compact JSON form of one error entry, keys in service order
pub fn format_error_entry(entry: &Value) -> String {
    entry.to_string()
}
