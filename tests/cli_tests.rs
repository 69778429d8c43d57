//! CLI integration tests using the real bundle-order binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    common::bundle_order_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start order"))
        .stdout(predicate::str::contains("group"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--descriptor"));
}

#[test]
fn test_version_output() {
    common::bundle_order_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-order"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    common::bundle_order_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-order"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("feature.json", common::MIXED_FEATURE_JSON);

    common::bundle_order_cmd_in(&workspace.path)
        .args(["-v", "group", "--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Grouped bundles by start order"))
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_quiet_by_default() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("feature.json", common::MIXED_FEATURE_JSON);

    common::bundle_order_cmd_in(&workspace.path)
        .arg("group")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_subcommand() {
    common::bundle_order_cmd().assert().failure();
}
