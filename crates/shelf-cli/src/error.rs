//! Error types for the Shelf CLI.
//!
//! - [`CliError`] is what commands return; analysis and configuration
//!   failures convert into it.
//! - [`ConfigError`] covers loading and validating `shelf.toml`.
//!
//! At the `main` boundary a [`CliError`] becomes a [`miette::Report`] via
//! [`cli_error_to_miette`].

use std::path::PathBuf;

use miette::Report;
use shelf_analysis::{AnalysisError, ErrorCategory};
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A single component could not be analyzed or written
    #[error("Failed to generate registry for {component}: {source}")]
    Analysis {
        component: String,
        #[source]
        source: AnalysisError,
    },

    /// The component list itself could not be produced
    #[error("Failed to list components: {0}")]
    Discovery(#[source] AnalysisError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Batch mode finished with failures and `fail_on_batch_error` is set
    #[error("{} of {total} components failed: {}", failed.len(), failed.join(", "))]
    BatchFailed { failed: Vec<String>, total: usize },

    /// I/O errors outside the analysis itself
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `shelf.toml` could not be read or parsed, or has unknown keys
    #[error("Invalid config file {}: {message}\n\nHint: Check shelf.toml syntax and key names", path.display())]
    Parse { path: PathBuf, message: String },

    /// A value is present but unusable
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a [`CliError`] into a miette report with a hint where one helps.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match &err {
        CliError::Analysis { source, .. } | CliError::Discovery(source) => {
            match analysis_hint(source) {
                Some(hint) => miette::miette!(help = hint, "{}", err),
                None => miette::miette!("{}", err),
            }
        }
        CliError::BatchFailed { .. } => miette::miette!(
            help = "Set fail_on_batch_error = false in shelf.toml to report failures without failing the run",
            "{}",
            err
        ),
        _ => miette::miette!("{}", err),
    }
}

fn analysis_hint(err: &AnalysisError) -> Option<&'static str> {
    match err {
        AnalysisError::ComponentNotFound { .. } => {
            Some("Component names match directory names under the components directory")
        }
        AnalysisError::UnresolvedSpecifier { .. } => {
            Some("Check the alias declarations in the build config and that the shared file exists")
        }
        _ if err.category() == ErrorCategory::ReadFailure => {
            Some("Check that the file exists, is readable and is UTF-8 text")
        }
        _ => None,
    }
}
