//! End-to-end tests for the sidecheck binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

/// Write a sidebar configuration and return its path.
fn write_sidebars(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("sidebars.json");
    fs::write(&path, json).unwrap();
    path
}

/// Write a markdown file under the conventional docs/ root.
fn write_doc(dir: &Path, rel_path: &str) {
    let path = dir.join("docs").join(rel_path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "# Page\n").unwrap();
}

fn sidecheck() -> Command {
    Command::cargo_bin("sidecheck").unwrap()
}

#[test]
fn bijection_exits_zero_with_confirmation() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(
        temp.path(),
        r#"{ "docs": ["intro", { "type": "doc", "id": "guide/install" }] }"#,
    );
    write_doc(temp.path(), "intro.md");
    write_doc(temp.path(), "guide/install.md");

    sidecheck()
        .arg(&sidebars)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All IDs have corresponding .md files and vice versa.",
        ));
}

#[test]
fn missing_file_is_reported_and_exits_nonzero() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": ["guide/install"] }"#);
    fs::create_dir(temp.path().join("docs")).unwrap();

    sidecheck()
        .arg(&sidebars)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing markdown files for IDs:"))
        .stderr(predicate::str::contains("  - guide/install.md"));
}

#[test]
fn extra_file_is_reported_and_exits_nonzero() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": [] }"#);
    write_doc(temp.path(), "orphan.md");

    sidecheck()
        .arg(&sidebars)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Markdown files with no matching ID in the sidebar:",
        ))
        .stderr(predicate::str::contains("  - orphan.md"));
}

#[test]
fn missing_and_extra_are_reported_together() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": ["declared"] }"#);
    write_doc(temp.path(), "undeclared.md");

    sidecheck()
        .arg(&sidebars)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("declared.md"))
        .stderr(predicate::str::contains("undeclared.md"));
}

#[test]
fn duplicate_id_aborts_before_scanning() {
    let temp = tempfile::tempdir().unwrap();
    // No docs/ directory: the duplicate must surface, not the missing root.
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": ["x", "x"] }"#);

    sidecheck()
        .arg(&sidebars)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duplicate id found: \"x\""))
        .stderr(predicate::str::contains("Content directory").not());
}

#[test]
fn missing_docs_dir_is_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": ["intro"] }"#);

    sidecheck()
        .arg(&sidebars)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Content directory not found"));
}

#[test]
fn missing_argument_is_usage_error_exit_one() {
    sidecheck()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_zero() {
    sidecheck().arg("--help").assert().success();
}

#[test]
fn category_link_id_counts_as_declared() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(
        temp.path(),
        r#"{ "docs": [
            {
                "type": "category",
                "label": "Getting started",
                "link": { "type": "doc", "id": "getting-started/index" },
                "items": [ { "type": "doc", "id": "getting-started/install" } ]
            }
        ] }"#,
    );
    write_doc(temp.path(), "getting-started/index.md");
    write_doc(temp.path(), "getting-started/install.md");

    sidecheck().arg(&sidebars).assert().success();
}

#[test]
fn docs_dir_flag_overrides_convention() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": ["intro"] }"#);
    let alt_root = temp.path().join("content");
    fs::create_dir(&alt_root).unwrap();
    fs::write(alt_root.join("intro.md"), "# Intro\n").unwrap();

    sidecheck()
        .arg(&sidebars)
        .arg("--docs-dir")
        .arg(&alt_root)
        .assert()
        .success();
}

#[test]
fn json_report_lists_both_sets() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": ["declared"] }"#);
    write_doc(temp.path(), "undeclared.md");

    let assert = sidecheck().arg(&sidebars).arg("--json").assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["missing"], serde_json::json!(["declared.md"]));
    assert_eq!(report["extra"], serde_json::json!(["undeclared.md"]));
}

#[test]
fn repeated_runs_produce_identical_output() {
    let temp = tempfile::tempdir().unwrap();
    let sidebars = write_sidebars(temp.path(), r#"{ "docs": ["a", "b"] }"#);
    write_doc(temp.path(), "a.md");
    write_doc(temp.path(), "c.md");

    let first = sidecheck().arg(&sidebars).assert().code(1);
    let second = sidecheck().arg(&sidebars).assert().code(1);
    assert_eq!(
        first.get_output().stderr,
        second.get_output().stderr,
        "output must be identical across runs on unchanged inputs"
    );
}
