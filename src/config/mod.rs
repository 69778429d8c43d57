//! Configuration file handling for bundle-order
//!
//! This module contains data structures for:
//! - `feature.json` / `feature.yaml` - Feature descriptor listing the bundles

pub mod descriptor;

// Re-export commonly used types
pub use descriptor::{DEFAULT_DESCRIPTOR_NAMES, DescriptorFormat, FeatureDescriptor};
