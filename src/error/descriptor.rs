//! Feature descriptor errors

use super::BundleOrderError;

/// Creates a descriptor not found error
pub fn not_found(path: impl Into<String>) -> BundleOrderError {
    BundleOrderError::DescriptorNotFound { path: path.into() }
}

/// Creates a descriptor parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BundleOrderError {
    BundleOrderError::DescriptorParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported descriptor format error
pub fn unsupported_format(path: impl Into<String>) -> BundleOrderError {
    BundleOrderError::UnsupportedDescriptorFormat { path: path.into() }
}

/// Creates a descriptor validation failed error
pub fn validation_failed(message: impl Into<String>) -> BundleOrderError {
    BundleOrderError::DescriptorValidationFailed {
        message: message.into(),
    }
}
