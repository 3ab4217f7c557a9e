//! # portal-mgmt CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behaviour of the binary: `--help`, `--version`, subcommand help
//! and the long-only `--help` of subcommands whose `-h` means `--host`.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    portal_mgmt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("get"));
}

#[test]
fn test_version() {
    portal_mgmt_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_import_help_lists_flags() {
    portal_mgmt_cmd()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--portalcontainer"))
        .stdout(predicate::str::contains("--importfile"))
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_get_help_lists_content_type() {
    portal_mgmt_cmd()
        .args(["get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--contentType"));
}
