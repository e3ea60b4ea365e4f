//! Error types and handling for crdsplit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Chart loading and dependency errors
//! - [`document`]: Per-document parse errors (recoverable)
//! - [`fs`]: File system errors
//!
//! Load and save errors are fatal and end the command. Document errors are
//! recoverable: callers log them and carry on with the next file.

pub mod bundle;
pub mod document;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for crdsplit operations
#[derive(Error, Diagnostic, Debug)]
pub enum SplitError {
    // Chart errors
    #[error("Failed to load chart from '{path}': {reason}")]
    #[diagnostic(
        code(crdsplit::bundle::load_failed),
        help("The input must be a chart directory or a .tgz chart archive")
    )]
    ChartLoadFailed { path: String, reason: String },

    #[error("Invalid Chart.yaml in '{path}': {reason}")]
    #[diagnostic(code(crdsplit::bundle::metadata_invalid))]
    ChartMetadataInvalid { path: String, reason: String },

    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(crdsplit::bundle::circular),
        help("Remove the symlink that points a subchart back at one of its ancestors")
    )]
    CircularDependency { chain: String },

    // Document errors
    #[error("Failed to parse document '{path}': {reason}")]
    #[diagnostic(code(crdsplit::document::parse_failed))]
    DocumentParseFailed { path: String, reason: String },

    #[error("Document '{path}' is not a CustomResourceDefinition")]
    #[diagnostic(code(crdsplit::document::not_a_crd))]
    NotASchemaDefinition { path: String },

    #[error("Cannot set '{field}' in '{path}': value is not a mapping")]
    #[diagnostic(code(crdsplit::document::not_a_mapping))]
    DocumentNotAMapping { path: String, field: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(crdsplit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(crdsplit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Refusing to write outside the chart directory: {path}")]
    #[diagnostic(code(crdsplit::fs::unsafe_path))]
    UnsafePath { path: String },

    // Command line errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(crdsplit::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

#[cfg(test)]
impl SplitError {
    /// Whether this error ends the command or only affects a single document
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SplitError::DocumentParseFailed { .. }
                | SplitError::NotASchemaDefinition { .. }
                | SplitError::DocumentNotAMapping { .. }
        )
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SplitError>;
