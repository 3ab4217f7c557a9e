//! # Portal Management Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared by the portal management
//! commands. It follows a two-layer approach:
//! - `PortalMgmtError`: a `thiserror` enum for the failures commands need to
//!   recognise (missing import file, bad content type, closed input, ...)
//! - `Result<T>`: an alias for `anyhow::Result<T>` so callers can attach context
//!
//! Errors raised by the remote management client live next to the client in
//! `common::client` (`MgmtClientError`) and are wrapped by `anyhow` when they
//! propagate into command code.
//!
//! ## Examples
//!
//! ```rust,ignore
//! if !import_file.exists() {
//!     return Err(PortalMgmtError::ImportFileNotFound { path: import_file }.into());
//! }
//!
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<PortalMgmtError>(), Some(PortalMgmtError::ImportFileNotFound { .. })) => {
//!         std::process::exit(1);
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the portal management CLI.
#[derive(Error, Debug)]
pub enum PortalMgmtError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot find file {}", path.display())]
    ImportFileNotFound { path: PathBuf },

    #[error("Unsupported content type '{value}'. Expected one of: json, xml, zip.")]
    InvalidContentType { value: String },

    #[error("No input available for prompt '{prompt}'")]
    InputClosed { prompt: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
