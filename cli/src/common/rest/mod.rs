//! # Managed Resource REST Support (`common::rest`)
//!
//! File: cli/src/common/rest/mod.rs
//!
//! ## Overview
//!
//! Everything needed to represent a managed resource and turn it into the
//! JSON body of an HTTP response:
//! - `model`: `Resource`, `Child`, `Operation`, `Link`
//! - `provider`: `JsonResourceProvider` and the `axum` adapter `ResourceResponse`
//!
//! The `get` command uses both: the server's answer is decoded into a
//! `Resource` and written back out through the provider.
//!
pub mod model;
pub mod provider;

pub use model::{Child, Link, Operation, Resource};
pub use provider::{JsonResourceProvider, MessageBodyWriter};
