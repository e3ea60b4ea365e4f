//! Document errors
//!
//! All of these are recoverable: the file is skipped or passed through.

use super::SplitError;

/// Creates a document parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SplitError {
    SplitError::DocumentParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a "not a CustomResourceDefinition" error
pub fn not_a_schema_definition(path: impl Into<String>) -> SplitError {
    SplitError::NotASchemaDefinition { path: path.into() }
}

/// Creates an error for a nested field whose parent is not a mapping
pub fn not_a_mapping(path: impl Into<String>, field: impl Into<String>) -> SplitError {
    SplitError::DocumentNotAMapping {
        path: path.into(),
        field: field.into(),
    }
}
