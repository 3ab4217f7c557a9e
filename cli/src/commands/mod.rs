//! # Portal Management Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The top-level commands of the `portal-mgmt` CLI. Each module defines its
//! own `clap` arguments structure and an async handler that `main.rs` routes to.
//!
//! ## Commands
//!
//! - `import`: push a portal objects archive into a portal container
//! - `get`: show a managed resource in the requested content type
//!

/// Import of portal objects archives (`portal-mgmt import`).
pub mod import;
/// Managed resource viewer (`portal-mgmt get`).
pub mod get;
