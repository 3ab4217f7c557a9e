//! # portal-mgmt
//!
//! File: cli/src/lib.rs
//!
//! Library half of the `portal-mgmt` CLI. The binary in `main.rs` only parses
//! arguments, sets up logging and routes to `commands`; everything else lives
//! here so it can be reused and tested directly.
//!
pub mod commands;
pub mod common;
pub mod core;
