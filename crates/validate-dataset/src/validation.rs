//! Core validation routine
//!
//! Resolves and reads the metadata file, builds the request payload, hands it
//! to the [`ItbClient`] and turns the service reply into a typed
//! [`ValidationOutcome`]. Nothing in here prints or exits; the CLI layer
//! decides how an outcome is rendered and which exit code it maps to.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::client::ItbClient;
use crate::error::{Result, ValidationError};
use crate::profile::{Domain, Profile, ValidationType};

/// Syntax marker sent with every request
pub const CONTENT_SYNTAX: &str = "text/turtle";

/// Result tag reported by the validator for conforming content
pub const RESULT_SUCCESS: &str = "SUCCESS";

/// Result tag reported by the validator for non-conforming content
pub const RESULT_FAILURE: &str = "FAILURE";

/// One validation run, built from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub file: PathBuf,
    pub profile: Profile,
}

impl Invocation {
    pub fn new(file: impl Into<PathBuf>, domain: Domain, validation_type: ValidationType) -> Self {
        Self {
            file: file.into(),
            profile: Profile::new(domain, validation_type),
        }
    }

    /// Absolute path of the metadata file
    ///
    /// Relative paths are resolved against the current working directory.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        if self.file.is_absolute() {
            return Ok(self.file.clone());
        }
        let cwd = std::env::current_dir().map_err(|e| {
            ValidationError::file_error(format!("Failed to read working directory: {}", e))
        })?;
        Ok(cwd.join(&self.file))
    }
}

/// Payload accepted by the validator's `api/validate` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub content_to_validate: String,
    pub content_syntax: String,
    pub validation_type: ValidationType,
}

impl ValidationRequest {
    pub fn new(content: impl Into<String>, validation_type: ValidationType) -> Self {
        Self {
            content_to_validate: content.into(),
            content_syntax: CONTENT_SYNTAX.to_string(),
            validation_type,
        }
    }
}

/// Verdict of a completed validation exchange
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The content conforms to the profile
    Success,
    /// The content violates the profile; error entries in service order
    Failure { errors: Vec<Value> },
    /// The service answered with a result tag we do not know
    Unexpected { body: String },
}

impl ValidationOutcome {
    /// Classify a decoded response body
    ///
    /// `raw` is the body text as received and is kept verbatim for
    /// [`ValidationOutcome::Unexpected`].
    pub fn from_response(body: &Value, raw: &str) -> Self {
        match body.get("result").and_then(Value::as_str) {
            Some(RESULT_SUCCESS) => ValidationOutcome::Success,
            Some(RESULT_FAILURE) => {
                let errors = body
                    .get("reports")
                    .and_then(|reports| reports.get("error"))
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();
                ValidationOutcome::Failure { errors }
            }
            _ => ValidationOutcome::Unexpected {
                body: raw.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success)
    }
}

/// Read the metadata file as text
///
/// Fails with [`ValidationError::FileNotFound`] when nothing exists at `path`.
pub fn read_metadata(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ValidationError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| {
        ValidationError::file_error(format!(
            "Failed to read metadata file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Validate one metadata file against its profile
///
/// The file is read and released before the request is sent. A missing file
/// never reaches the network.
pub async fn validate(client: &ItbClient, invocation: &Invocation) -> Result<ValidationOutcome> {
    let path = invocation.resolved_path()?;
    let content = read_metadata(&path)?;

    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        profile = %invocation.profile,
        "Read metadata file"
    );

    let request = ValidationRequest::new(content, invocation.profile.validation_type);
    client.validate(invocation.profile.domain, &request).await
}
