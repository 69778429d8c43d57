//! Command implementations for bundle-order CLI

pub mod completions;
pub mod group;
pub mod list;
pub mod version;

use std::path::PathBuf;

use crate::config::{FeatureDescriptor, descriptor};
use crate::error::{BundleOrderError, Result};

/// Resolve and load the feature descriptor for a command
///
/// Without an explicit path the current directory is searched.
pub fn load_descriptor(explicit: Option<PathBuf>) -> Result<FeatureDescriptor> {
    let current_dir = std::env::current_dir().map_err(|e| BundleOrderError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })?;

    let path = descriptor::resolve_path(explicit, &current_dir)?;
    tracing::debug!(path = %path.display(), "Using feature descriptor");

    FeatureDescriptor::load(&path)
}
