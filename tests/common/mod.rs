//! Common test utilities for bundle-order integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory holding feature descriptors
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }
}

/// A descriptor with start orders 3, unspecified, 1, unspecified, 2
#[allow(dead_code)]
pub const MIXED_FEATURE_JSON: &str = r#"{
    "id": "org.example:mixed-feature:1.0.0",
    "bundles": [
        {"id": "org.example:three:1.0", "start-order": 3},
        "org.example:first-unspecified:1.0",
        {"id": "org.example:one:1.0", "start-order": "1"},
        {"id": "org.example:second-unspecified:1.0", "start-order": 0},
        {"id": "org.example:two:1.0", "start-order": 2}
    ]
}"#;

/// Command for the bundle-order binary, isolated from developer settings
#[allow(deprecated)]
pub fn bundle_order_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bundle-order").expect("Failed to find bundle-order binary");
    cmd.env_remove("BUNDLE_ORDER_DESCRIPTOR");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.env("CLICOLOR", "0");
    cmd
}

/// Command running inside the given directory
#[allow(dead_code)]
pub fn bundle_order_cmd_in(dir: &Path) -> Command {
    let mut cmd = bundle_order_cmd();
    cmd.current_dir(dir);
    cmd
}
