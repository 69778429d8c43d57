//! Artifact metadata errors

use super::BundleOrderError;

/// Creates an invalid start order error
pub fn invalid_start_order(id: impl Into<String>, value: impl Into<String>) -> BundleOrderError {
    BundleOrderError::InvalidStartOrder {
        id: id.into(),
        value: value.into(),
    }
}
