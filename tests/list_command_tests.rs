//! List command integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_list_shows_declaration_order() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("feature.json", common::MIXED_FEATURE_JSON);

    let output = common::bundle_order_cmd_in(&workspace.path)
        .arg("list")
        .output()
        .expect("Failed to run bundle-order");
    assert!(output.status.success());

    let stdout = console::strip_ansi_codes(&String::from_utf8_lossy(&output.stdout)).into_owned();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Bundles (5):");
    assert_eq!(lines[1], "  org.example:three:1.0 (start order 3)");
    assert_eq!(lines[2], "  org.example:first-unspecified:1.0 (start order unspecified)");
    assert_eq!(lines[3], "  org.example:one:1.0 (start order 1)");
}

#[test]
fn test_list_json_output() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "feature.yaml",
        "bundles:\n  - org.example:a:1.0\n  - id: org.example:b:1.0\n    start-order: 4\n",
    );

    let output = common::bundle_order_cmd_in(&workspace.path)
        .args(["list", "--format", "json"])
        .output()
        .expect("Failed to run bundle-order");
    assert!(output.status.success());

    let bundles: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list output should be JSON");
    assert_eq!(
        bundles,
        serde_json::json!([
            {"id": "org.example:a:1.0", "start-order": 0},
            {"id": "org.example:b:1.0", "start-order": 4}
        ])
    );
}

#[test]
fn test_list_empty_descriptor() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("feature.yml", "id: org.example:empty:1.0\n");

    common::bundle_order_cmd_in(&workspace.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bundles declared."));
}
