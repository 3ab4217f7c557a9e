//! # Portal Objects Management Client (`common::client`)
//!
//! File: cli/src/common/client/mod.rs
//!
//! ## Overview
//!
//! The importer talks to the portal server through the `PortalObjectsMgmtClient`
//! trait. Clients are obtained from a `ClientFactory`, which binds them to a
//! host, port, credentials and portal container.
//!
//! ## Architecture
//!
//! - `ImportContext`: portal configs, pages and navigations read from an archive,
//!   plus the overwrite flag that controls how the server applies them
//! - `PortalObjectsMgmtClient`: `import_from_zip` (archive -> context) and
//!   `import_context` (the mutating call)
//! - `ClientFactory`: creates bound clients; `http::HttpClientFactory` is the
//!   production implementation
//! - `MgmtClientError`: failures raised by clients
//!
//! Keeping creation behind a factory lets the importer be exercised with fakes
//! that record every call.
//!
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod http;

pub use http::{HttpClientFactory, HttpPortalObjectsClient, RestClient};

/// Errors raised by the management client.
#[derive(Error, Debug)]
pub enum MgmtClientError {
    #[error("Failed to read archive {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

/// A site (portal, group or user) configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    pub owner_type: String,
    pub owner_id: String,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

/// A page belonging to a site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub owner_type: String,
    pub owner_id: String,
    pub name: String,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

/// The navigation tree of a site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub owner_type: String,
    pub owner_id: String,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

/// Portal objects parsed from an import archive.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportContext {
    #[serde(default)]
    portal_configs: Vec<PortalConfig>,
    #[serde(default)]
    pages: Vec<Page>,
    #[serde(default)]
    navigations: Vec<Navigation>,
    #[serde(default)]
    overwrite: bool,
}

impl ImportContext {
    pub fn new(
        portal_configs: Vec<PortalConfig>,
        pages: Vec<Page>,
        navigations: Vec<Navigation>,
    ) -> Self {
        Self {
            portal_configs,
            pages,
            navigations,
            overwrite: false,
        }
    }

    pub fn portal_configs(&self) -> &[PortalConfig] {
        &self.portal_configs
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn navigations(&self) -> &[Navigation] {
        &self.navigations
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    /// True when the archive held no portal configs, pages or navigations.
    pub fn is_empty(&self) -> bool {
        self.portal_configs.is_empty() && self.pages.is_empty() && self.navigations.is_empty()
    }
}

/// Remote operations on portal objects of one portal container.
#[async_trait]
pub trait PortalObjectsMgmtClient: Send + Sync {
    /// Uploads an export archive and returns what the server parsed out of it.
    /// Nothing is changed on the server.
    async fn import_from_zip(&self, file: &Path) -> Result<ImportContext, MgmtClientError>;

    /// Applies a parsed context on the server.
    async fn import_context(&self, context: &ImportContext) -> Result<(), MgmtClientError>;
}

/// Creates clients bound to a server and portal container.
pub trait ClientFactory {
    type Client: PortalObjectsMgmtClient;

    fn create(
        &self,
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        container_name: &str,
    ) -> Result<Self::Client, MgmtClientError>;
}
