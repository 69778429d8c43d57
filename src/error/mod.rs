//! Error types and handling for bundle-order
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers live in sub-modules by error domain:
//! - [`artifact`]: Artifact metadata errors
//! - [`descriptor`]: Feature descriptor errors
//! - [`fs`]: File system errors
//! - [`output`]: Output rendering errors

pub mod artifact;
pub mod descriptor;
pub mod fs;
pub mod output;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundle-order operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleOrderError {
    // Artifact errors
    #[error("Invalid start order '{value}' for bundle '{id}'")]
    #[diagnostic(
        code(bundle_order::artifact::invalid_start_order),
        help("The 'start-order' metadata must be an integer, e.g. \"start-order\": 20")
    )]
    InvalidStartOrder { id: String, value: String },

    // Descriptor errors
    #[error("Feature descriptor not found: {path}")]
    #[diagnostic(
        code(bundle_order::descriptor::not_found),
        help("Pass --descriptor or create feature.json, feature.yaml or feature.yml")
    )]
    DescriptorNotFound { path: String },

    #[error("Failed to parse feature descriptor: {path}: {reason}")]
    #[diagnostic(code(bundle_order::descriptor::parse_failed))]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Unsupported feature descriptor format: {path}")]
    #[diagnostic(
        code(bundle_order::descriptor::unsupported_format),
        help("Supported extensions: .json, .yaml, .yml")
    )]
    UnsupportedDescriptorFormat { path: String },

    #[error("Feature descriptor validation failed: {message}")]
    #[diagnostic(code(bundle_order::descriptor::validation_failed))]
    DescriptorValidationFailed { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(bundle_order::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Output errors
    #[error("Failed to render {format} output: {reason}")]
    #[diagnostic(code(bundle_order::output::render_failed))]
    OutputRenderFailed { format: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(bundle_order::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundle_order::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BundleOrderError {
    fn from(err: std::io::Error) -> Self {
        BundleOrderError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BundleOrderError {
    fn from(err: serde_yaml::Error) -> Self {
        BundleOrderError::DescriptorParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BundleOrderError {
    fn from(err: serde_json::Error) -> Self {
        BundleOrderError::DescriptorParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleOrderError>;
