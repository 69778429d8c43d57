//! Output rendering errors

use super::BundleOrderError;

/// Creates an output render failed error
pub fn render_failed(format: impl Into<String>, reason: impl Into<String>) -> BundleOrderError {
    BundleOrderError::OutputRenderFailed {
        format: format.into(),
        reason: reason.into(),
    }
}
