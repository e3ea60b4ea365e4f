//! Chart loading and dependency errors

use super::SplitError;

/// Creates a chart load failed error
pub fn load_failed(path: impl Into<String>, reason: impl Into<String>) -> SplitError {
    SplitError::ChartLoadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid Chart.yaml error
pub fn metadata_invalid(path: impl Into<String>, reason: impl Into<String>) -> SplitError {
    SplitError::ChartMetadataInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a circular dependency error
pub fn circular(chain: impl Into<String>) -> SplitError {
    SplitError::CircularDependency {
        chain: chain.into(),
    }
}
