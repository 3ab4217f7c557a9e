//! # Portal Management Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: connection settings loaded from TOML, flags and defaults
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config; // For loading connection settings
//! use crate::core::error::{PortalMgmtError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
