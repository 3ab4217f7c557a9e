//! # portal-mgmt Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`:
//! - `portal_mgmt_cmd()` builds a command for the compiled binary with a clean
//!   environment
//! - `MockPortal` runs an in-process `axum` server that speaks the management
//!   REST API and records what the CLI sent to it
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use axum::{
    body::Bytes,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use portal_mgmt::common::{
    client::{ImportContext, Page},
    rest::{provider::ResourceResponse, Child, Link, Operation, Resource},
};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tokio::{net::TcpListener, runtime::Runtime};

/// Command for the `portal-mgmt` binary, without inherited credentials or log settings.
pub fn portal_mgmt_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("portal-mgmt").expect("Failed to find portal-mgmt binary for testing");
    cmd.env_remove("PORTAL_MGMT_USERNAME")
        .env_remove("PORTAL_MGMT_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// A context holding one page, as the server would parse it from an archive.
pub fn one_page_context() -> ImportContext {
    ImportContext::new(
        vec![],
        vec![Page {
            owner_type: "portal".into(),
            owner_id: "classic".into(),
            name: "homepage".into(),
            body: Default::default(),
        }],
        vec![],
    )
}

/// The resource served under `managed-components/`.
pub fn sample_resource() -> Resource {
    Resource::new("Management root")
        .with_child(Child::new(
            "mop",
            "Portal objects",
            Link::new("/managed-components/mop").rel("child"),
        ))
        .with_operation(Operation::new(
            "read-resource",
            "Lists the children",
            Link::new("/managed-components").method("get"),
        ))
}

#[derive(Clone, Default)]
pub struct Recorded {
    pub parse_calls: Arc<AtomicUsize>,
    pub imports: Arc<Mutex<Vec<ImportContext>>>,
}

/// In-process portal server bound to an ephemeral port.
pub struct MockPortal {
    pub port: u16,
    pub recorded: Recorded,
    _runtime: Runtime,
}

impl MockPortal {
    /// Server whose archive parser answers with `parsed`.
    pub fn start(parsed: ImportContext) -> Self {
        Self::start_with(Some(parsed))
    }

    /// Server whose archive parser always fails with a 500.
    pub fn failing() -> Self {
        Self::start_with(None)
    }

    fn start_with(parsed: Option<ImportContext>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        let recorded = Recorded::default();

        let parse_calls = recorded.parse_calls.clone();
        let imports = recorded.imports.clone();
        let app = Router::new()
            .route(
                "/rest/private/portalobjects/{container}/import/parse",
                post(move |_archive: Bytes| {
                    let parsed = parsed.clone();
                    parse_calls.fetch_add(1, Ordering::SeqCst);
                    async move {
                        parsed
                            .map(Json)
                            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "corrupt archive"))
                    }
                }),
            )
            .route(
                "/rest/private/portalobjects/{container}/import",
                post(move |Json(context): Json<ImportContext>| {
                    imports.lock().unwrap().push(context);
                    async { StatusCode::NO_CONTENT }
                }),
            )
            .route(
                "/rest/private/managed-components/{*path}",
                get(|| async { ResourceResponse(sample_resource()) }),
            );

        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .expect("Failed to bind mock portal");
        let port = listener.local_addr().unwrap().port();
        runtime.spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            port,
            recorded,
            _runtime: runtime,
        }
    }

    /// Writes a config file pointing at this server and returns its path.
    pub fn config_file(&self, dir: &Path) -> PathBuf {
        let path = dir.join("portal-mgmt.toml");
        fs::write(
            &path,
            format!(
                "[connection]\nhost = \"127.0.0.1\"\nport = {}\nusername = \"root\"\npassword = \"gtn\"\n",
                self.port
            ),
        )
        .expect("Failed to write config file");
        path
    }

    pub fn parse_calls(&self) -> usize {
        self.recorded.parse_calls.load(Ordering::SeqCst)
    }

    pub fn imports(&self) -> Vec<ImportContext> {
        self.recorded.imports.lock().unwrap().clone()
    }
}
