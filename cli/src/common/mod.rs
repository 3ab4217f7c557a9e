//! # Portal Management Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command modules:
//!
//! - **`args`**: argument groups flattened into several commands (connection
//!   flags, `--contentType`).
//! - **`client`**: the portal objects management client trait, its HTTP
//!   implementation and the `ImportContext` it exchanges.
//! - **`rest`**: the managed resource model and its JSON provider.
//! - **`ui`**: interactive prompting behind the `InputProvider` trait.
//!

/// Argument groups shared between commands.
pub mod args;
/// Remote management client.
pub mod client;
/// Managed resources and their JSON representation.
pub mod rest;
/// Interactive prompts.
pub mod ui;
