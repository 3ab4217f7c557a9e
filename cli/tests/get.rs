//! # portal-mgmt Get Integration Tests
//!
//! File: cli/tests/get.rs
//!
//! ## Overview
//!
//! Runs `portal-mgmt get` against the mock portal and checks the content type
//! handling of the `--contentType` option.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_get_prints_canonical_json() {
    let portal = MockPortal::start(one_page_context());
    let dir = tempdir().unwrap();
    let config = portal.config_file(dir.path());

    portal_mgmt_cmd()
        .args(["get", "mop"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(concat!(
            r#"{"description":"Management root","children":[{"name":"mop","description":"Portal objects","#,
            r#""link":{"rel":"child","href":"/managed-components/mop"}}],"operations":[{"operation-name":"read-resource","#,
            r#""operation-description":"Lists the children","link":{"href":"/managed-components","method":"get"}}]}"#,
            "\n"
        ));
}

#[test]
fn test_get_rejects_unknown_content_type() {
    portal_mgmt_cmd()
        .args(["get", "mop", "--ct", "yaml", "--host", "127.0.0.1", "--port", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported content type 'yaml'"));
}
