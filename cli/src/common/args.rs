//! # Shared Command-Line Arguments (`common::args`)
//!
//! File: cli/src/common/args.rs
//!
//! ## Overview
//!
//! Argument groups that several commands flatten into their own `clap`
//! definitions:
//! - `ConnectionArgs`: where the portal server is and how to log in
//! - `ContentTypeOption`: `--contentType` (alias `--ct`), the desired content
//!   type of an operation
//!
//! `ContentTypeOption` only carries the raw string. Commands that consume it
//! validate it with `ContentType::from_str`.
//!
//! ```rust,ignore
//! #[derive(Parser, Debug)]
//! pub struct GetArgs {
//!     #[command(flatten)]
//!     connection: ConnectionArgs,
//!     #[command(flatten)]
//!     content_type: ContentTypeOption,
//! }
//! ```
//!
use crate::core::{
    config::{self, ConnectionConfig, ConnectionSettings},
    error::{PortalMgmtError, Result},
};
use clap::Args;
use std::{fmt, path::PathBuf, str::FromStr};
use tracing::debug;

/// Connection flags shared by every command that talks to a portal server.
///
/// `-h` is taken by `--host`, so commands flattening this group disable the
/// automatic help flag and declare a long-only `--help`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Sets custom configuration file to be used.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Username to connect to portal with.
    #[arg(long, short = 'u', env = "PORTAL_MGMT_USERNAME")]
    pub username: Option<String>,

    /// Password to connect to portal with.
    #[arg(long, short = 'p', env = "PORTAL_MGMT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Host of the server the portal is running on.
    #[arg(long, short = 'h')]
    pub host: Option<String>,

    /// Port of the server the portal is running on.
    #[arg(long)]
    pub port: Option<u16>,
}

impl ConnectionArgs {
    /// Resolves flags over the config file over built-in defaults.
    pub fn resolve(&self, portal_container: Option<String>) -> Result<ConnectionSettings> {
        let file = config::load_config(self.config.as_deref())?;
        let flags = ConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
            portal_container,
            timeout_secs: None,
        };
        let settings = file.connection.overlay(flags).into_settings();
        debug!("Resolved connection settings: {:?}", settings);
        Ok(settings)
    }
}

/// The `--contentType` option.
#[derive(Args, Debug, Clone, Default)]
pub struct ContentTypeOption {
    /// content type of an operation
    #[arg(
        long = "contentType",
        visible_alias = "ct",
        value_name = "TYPE",
        long_help = "The content type of an operation"
    )]
    pub content_type: Option<String>,
}

/// Content types understood by the management REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Json,
    Xml,
    Zip,
}

impl ContentType {
    /// Media type sent in the `Accept` header.
    pub fn media_type(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
            ContentType::Zip => "application/zip",
        }
    }

    /// Validates the raw option value; no value means JSON.
    pub fn from_option(option: &ContentTypeOption) -> Result<Self> {
        match option.content_type.as_deref() {
            Some(value) => Ok(value.parse()?),
            None => Ok(ContentType::default()),
        }
    }
}

impl FromStr for ContentType {
    type Err = PortalMgmtError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let essence = value.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "json" | "application/json" => Ok(ContentType::Json),
            "xml" | "application/xml" | "text/xml" => Ok(ContentType::Xml),
            "zip" | "application/zip" => Ok(ContentType::Zip),
            _ => Err(PortalMgmtError::InvalidContentType {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Json => "json",
            ContentType::Xml => "xml",
            ContentType::Zip => "zip",
        };
        f.write_str(name)
    }
}
