//! Feature descriptor (feature.json / feature.yaml)
//!
//! A descriptor names a feature and lists its bundles:
//!
//! ```yaml
//! id: org.example:my-feature:1.0.0
//! bundles:
//!   - org.example:api:1.0.0
//!   - id: org.example:core:1.0.0
//!     start-order: 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundles::Bundles;
use crate::error::{Result, descriptor, fs};

/// File names looked up when no descriptor path is given
pub const DEFAULT_DESCRIPTOR_NAMES: [&str; 3] = ["feature.json", "feature.yaml", "feature.yml"];

/// On-disk format of a feature descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Json,
    Yaml,
}

impl DescriptorFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(descriptor::unsupported_format(path.display().to_string())),
        }
    }
}

/// Feature descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Feature id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Feature description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Bundles in declaration order
    #[serde(default)]
    pub bundles: Bundles,
}

impl FeatureDescriptor {
    /// Parse descriptor from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(json)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Parse descriptor from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let descriptor: Self = serde_yaml::from_str(yaml)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Load and validate a descriptor file
    pub fn load(path: &Path) -> Result<Self> {
        let format = DescriptorFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

        let loaded: Self = match format {
            DescriptorFormat::Json => serde_json::from_str(&content)
                .map_err(|e| descriptor::parse_failed(path.display().to_string(), e.to_string()))?,
            DescriptorFormat::Yaml => serde_yaml::from_str(&content)
                .map_err(|e| descriptor::parse_failed(path.display().to_string(), e.to_string()))?,
        };
        loaded.validate()?;

        tracing::debug!(
            path = %path.display(),
            ?format,
            bundles = loaded.bundles.len(),
            "Loaded feature descriptor"
        );

        Ok(loaded)
    }

    /// Validate descriptor
    pub fn validate(&self) -> Result<()> {
        for (index, bundle) in self.bundles.iter().enumerate() {
            if bundle.id().trim().is_empty() {
                return Err(descriptor::validation_failed(format!(
                    "Bundle at position {} has an empty id",
                    index + 1
                )));
            }
        }

        Ok(())
    }
}

/// Find the descriptor to use
///
/// An explicit path must exist. Otherwise `dir` is searched for the
/// [`DEFAULT_DESCRIPTOR_NAMES`] in order.
pub fn resolve_path(explicit: Option<PathBuf>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path);
        }
        return Err(descriptor::not_found(path.display().to_string()));
    }

    DEFAULT_DESCRIPTOR_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            let expected = dir.join(DEFAULT_DESCRIPTOR_NAMES[0]);
            descriptor::not_found(expected.display().to_string())
        })
}
