//! # Portal Management Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the connection settings used to reach a portal server.
//! Values are resolved from several sources, in order of precedence:
//! 1. Command-line flags (`--host`, `--port`, `--username`, ...)
//! 2. A TOML configuration file: the one named by `--config`, or else
//!    `config.toml` in the per-user configuration directory
//! 3. Built-in defaults (`localhost:8080`, 30 second request timeout)
//!
//! Anything still missing after that (the portal container, for example) is
//! left to the command, which may prompt for it.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [connection]
//! host = "portal.example.com"
//! port = 8080
//! username = "root"
//! password = "gtn"
//! portal_container = "portal"
//! timeout_secs = 30
//! ```
//!
//! Loading and resolving:
//!
//! ```rust,ignore
//! let cfg = config::load_config(args.config.as_deref())?;
//! let settings = cfg.connection.overlay(flags).into_settings();
//! println!("Connecting to {}:{}", settings.host, settings.port);
//! ```
//!
use crate::core::error::{PortalMgmtError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Default host of the portal server.
pub const DEFAULT_HOST: &str = "localhost";
/// Default HTTP port of the portal server.
pub const DEFAULT_PORT: u16 = 8080;
/// Default timeout applied to each remote request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_CONFIG_FILENAME: &str = "config.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,
}

/// Connection settings as they appear in a config file (or on the command line).
/// Every field is optional so that partial sources can be layered.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub portal_container: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved connection settings handed to the management client.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Still optional here: the importer prompts for it when missing.
    pub portal_container: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("portal_container", &self.portal_container)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ConnectionConfig {
    /// Layers `over` on top of `self`: any value set in `over` wins.
    pub fn overlay(self, over: ConnectionConfig) -> ConnectionConfig {
        ConnectionConfig {
            host: over.host.or(self.host),
            port: over.port.or(self.port),
            username: over.username.or(self.username),
            password: over.password.or(self.password),
            portal_container: over.portal_container.or(self.portal_container),
            timeout_secs: over.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Fills the remaining gaps with built-in defaults.
    pub fn into_settings(self) -> ConnectionSettings {
        ConnectionSettings {
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            username: self.username,
            password: self.password,
            portal_container: self.portal_container,
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

/// Loads the configuration file.
///
/// With an explicit path the file must exist. Without one, the user config
/// directory is consulted and a missing file simply yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let path = expand_path(path);
            if !path.is_file() {
                return Err(anyhow!(PortalMgmtError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    path.display()
                ))));
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Loaded configuration: {:?}", redacted(&config));
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "GateIn", "portal-mgmt") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Expands a leading `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn validate_config(config: &Config) -> Result<()> {
    let conn = &config.connection;
    if conn.host.as_deref().is_some_and(|h| h.trim().is_empty()) {
        return Err(anyhow!(PortalMgmtError::Config(
            "Host cannot be empty.".to_string()
        )));
    }
    if conn.port == Some(0) {
        return Err(anyhow!(PortalMgmtError::Config(
            "Port must be between 1 and 65535.".to_string()
        )));
    }
    if conn.timeout_secs == Some(0) {
        return Err(anyhow!(PortalMgmtError::Config(
            "timeout_secs must be greater than zero.".to_string()
        )));
    }
    if conn
        .portal_container
        .as_deref()
        .is_some_and(|c| c.trim().is_empty() || c.contains('/'))
    {
        return Err(anyhow!(PortalMgmtError::Config(format!(
            "Invalid portal container name '{}'.",
            conn.portal_container.as_deref().unwrap_or_default()
        ))));
    }
    Ok(())
}

fn redacted(config: &Config) -> Config {
    let mut copy = config.clone();
    if copy.connection.password.is_some() {
        copy.connection.password = Some("***".to_string());
    }
    copy
}
