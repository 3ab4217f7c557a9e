//! # portal-mgmt Import Integration Tests
//!
//! File: cli/tests/import.rs
//!
//! ## Overview
//!
//! Runs `portal-mgmt import` against an in-process mock portal and checks the
//! exit statuses and the calls that reached the server.
//!

mod common;
use common::*;
use portal_mgmt::common::client::ImportContext;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_import_file_exits_1() {
    let portal = MockPortal::start(one_page_context());
    let dir = tempdir().unwrap();
    let config = portal.config_file(dir.path());

    portal_mgmt_cmd()
        .arg("import")
        .arg("--config")
        .arg(&config)
        .args(["--portalcontainer", "portal", "--overwrite", "false"])
        .arg("--importfile")
        .arg(dir.path().join("missing.zip"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot find file"));

    assert_eq!(portal.parse_calls(), 0);
    assert!(portal.imports().is_empty());
}

#[test]
fn test_declined_overwrite_exits_0_without_import() {
    let portal = MockPortal::start(one_page_context());
    let dir = tempdir().unwrap();
    let config = portal.config_file(dir.path());
    let archive = dir.path().join("site.zip");
    std::fs::write(&archive, b"PK").unwrap();

    portal_mgmt_cmd()
        .arg("import")
        .arg("--config")
        .arg(&config)
        .args(["--pc", "portal"])
        .arg("--file")
        .arg(&archive)
        .write_stdin("Y\nn\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overwrite set to true"));

    assert_eq!(portal.parse_calls(), 0);
    assert!(portal.imports().is_empty());
}

#[test]
fn test_forced_overwrite_import() {
    let portal = MockPortal::start(one_page_context());
    let dir = tempdir().unwrap();
    let config = portal.config_file(dir.path());
    let archive = dir.path().join("site.zip");
    std::fs::write(&archive, b"PK").unwrap();

    portal_mgmt_cmd()
        .arg("import")
        .arg("--config")
        .arg(&config)
        .args(["--portalcontainer", "portal", "-o", "true", "-f"])
        .arg("--importfile")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 portal configs, 1 pages"));

    assert_eq!(portal.parse_calls(), 1);
    let imports = portal.imports();
    assert_eq!(imports.len(), 1);
    assert!(imports[0].overwrite());
}

#[test]
fn test_empty_archive_is_a_no_op() {
    let portal = MockPortal::start(ImportContext::default());
    let dir = tempdir().unwrap();
    let config = portal.config_file(dir.path());
    let archive = dir.path().join("empty.zip");
    std::fs::write(&archive, b"PK").unwrap();

    portal_mgmt_cmd()
        .arg("import")
        .arg("--config")
        .arg(&config)
        .args(["--portalcontainer", "portal"])
        .arg("--importfile")
        .arg(&archive)
        .write_stdin("N\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to import."));

    assert_eq!(portal.parse_calls(), 1);
    assert!(portal.imports().is_empty());
}

#[test]
fn test_server_failure_exits_2() {
    let portal = MockPortal::failing();
    let dir = tempdir().unwrap();
    let config = portal.config_file(dir.path());
    let archive = dir.path().join("site.zip");
    std::fs::write(&archive, b"PK").unwrap();

    let output = portal_mgmt_cmd()
        .arg("import")
        .arg("--config")
        .arg(&config)
        .args(["--portalcontainer", "portal", "--overwrite", "false"])
        .arg("--importfile")
        .arg(&archive)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("500"));

    let stderr = String::from_utf8(output.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.matches("corrupt archive").count(), 1);
    assert!(portal.imports().is_empty());
}
