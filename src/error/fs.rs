//! File system errors

use super::BundleOrderError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BundleOrderError {
    BundleOrderError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
