//! validate-dataset
//!
//! Validates dataset metadata files (Turtle RDF) against the SHACL profiles
//! hosted by the EU Interoperability Test Bed validator. The tool performs no
//! validation of its own: it reads the file, submits it to the remote
//! `api/validate` operation and reports the verdict.
//!
//! ## Architecture
//!
//! 1. **Profile** (`profile`): closed sets of catalog domains and profile
//!    types, matched exhaustively when the request is built.
//!
//! 2. **Validation** (`validation`): reads the metadata file, builds the
//!    request payload, and classifies the reply as a [`ValidationOutcome`].
//!
//! 3. **Client** (`client/`): HTTP client for the SHACL validator.
//!
//! 4. **CLI** (`cli/`): command definitions, console rendering, and the
//!    single place where outcomes and errors become exit codes.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Validate against the default HealthRI v2.0.0 profile
//! validate-dataset validate metadata.ttl
//!
//! # Validate against DCAT-AP 3.0.1
//! validate-dataset validate metadata.ttl --domain dcat-ap --type v3.0.1.Full1
//!
//! # List the known profiles
//! validate-dataset info
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use validate_dataset::{validate, Domain, Invocation, ItbClient, ValidationType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), validate_dataset::ValidationError> {
//!     let client = ItbClient::new()?;
//!     let invocation = Invocation::new("metadata.ttl", Domain::DcatAp, ValidationType::V3Full1);
//!     let outcome = validate(&client, &invocation).await?;
//!     println!("conforms: {}", outcome.is_success());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod error;
pub mod profile;
pub mod validation;

pub use cli::{report_parse_error, DatasetCli, DatasetCommands, ExitCode};
pub use client::{ItbClient, ItbClientBuilder, ItbClientConfig};
pub use error::{Result, ValidationError};
pub use profile::{Domain, Profile, ValidationType};
pub use validation::{validate, Invocation, ValidationOutcome, ValidationRequest};

/// Run the CLI application
///
/// Renders results to `out` and errors to `err_out`, except a missing input
/// file which is reported on `out` next to the banner. Every path,
/// including transport failures, maps to an [`ExitCode`].
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use validate_dataset::{run_cli, DatasetCli};
///
/// #[tokio::main]
/// async fn main() {
///     let cli = DatasetCli::parse();
///     let exit_code = run_cli(cli, &mut std::io::stdout(), &mut std::io::stderr()).await;
///     std::process::exit(exit_code.into());
/// }
/// ```
pub async fn run_cli(
    cli: DatasetCli,
    out: &mut dyn std::io::Write,
    err_out: &mut dyn std::io::Write,
) -> ExitCode {
    match cli::run(cli, out).await {
        Ok(code) => code,
        Err(e) => {
            if !e.is_user_error() {
                tracing::error!(error = %e, "Validation run failed");
            }
            // A missing file is reported inline after the banner
            let target: &mut dyn std::io::Write = match &e {
                ValidationError::FileNotFound(_) => out,
                _ => err_out,
            };
            cli::output::render_error(target, &e).ok();
            ExitCode::Failure
        }
    }
}
