//! File system errors

use super::SplitError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SplitError {
    SplitError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SplitError {
    SplitError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a chart-relative path that escapes the chart root
pub fn unsafe_path(path: impl Into<String>) -> SplitError {
    SplitError::UnsafePath { path: path.into() }
}
