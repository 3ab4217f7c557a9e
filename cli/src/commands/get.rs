//! # Managed Resource Viewer
//!
//! File: cli/src/commands/get.rs
//!
//! ## Overview
//!
//! Implements `portal-mgmt get <path>`, which reads a managed resource from
//! the server's management REST API and prints it.
//!
//! The desired representation comes from `--contentType` (`--ct`). The raw
//! option value is validated here; `json` is used when it is absent. JSON
//! answers are decoded into a `Resource` and re-emitted through the
//! `JsonResourceProvider`, so the output always has the canonical key order.
//! Other representations (xml, zip) are copied to stdout untouched.
//!
//! ## Usage
//!
//! ```bash
//! portal-mgmt get mop/portalsites -u root -p gtn
//! portal-mgmt get mop/portalsites/classic --ct xml
//! portal-mgmt get mop/portalsites/classic --contentType zip > classic.zip
//! ```
//!
use crate::{
    common::{
        args::{ConnectionArgs, ContentType, ContentTypeOption},
        client::RestClient,
        rest::{JsonResourceProvider, MessageBodyWriter, Resource},
    },
    core::error::Result,
};
use anyhow::Context;
use clap::{ArgAction, Parser};
use mime::Mime;
use std::io::{self, Write};
use tracing::{debug, info};

/// # Get Arguments (`GetArgs`)
#[derive(Parser, Debug)]
#[command(about = "Show a managed resource", disable_help_flag = true)]
pub struct GetArgs {
    /// Path of the managed resource, relative to the management root (e.g. mop/portalsites).
    #[arg(default_value = "")]
    pub path: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub content_type: ContentTypeOption,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// # Handle Get Command (`handle_get`)
pub async fn handle_get(args: GetArgs) -> Result<()> {
    let content_type = ContentType::from_option(&args.content_type)?;
    info!(
        "Handling get command (Path: '{}', Content type: {})",
        args.path, content_type
    );

    let settings = args.connection.resolve(None)?;
    let rest = RestClient::new(
        &settings.host,
        settings.port,
        settings.username.as_deref(),
        settings.password.as_deref(),
        settings.timeout,
    )?;

    let (media_type, body) = rest
        .fetch_resource(&args.path, content_type.media_type())
        .await
        .with_context(|| format!("Failed to read managed resource '{}'", args.path))?;
    debug!(
        "Received {} bytes ({})",
        body.len(),
        media_type.as_deref().unwrap_or("no content type")
    );

    render(content_type, media_type.as_deref(), &body, io::stdout().lock())
}

/// Writes the server's answer to `out`.
fn render<W: Write>(
    requested: ContentType,
    media_type: Option<&str>,
    body: &[u8],
    mut out: W,
) -> Result<()> {
    let provider = JsonResourceProvider;
    let answered: Option<Mime> = media_type.and_then(|m| m.parse().ok());
    let is_json = answered
        .as_ref()
        .is_some_and(|m| MessageBodyWriter::<Resource>::is_writeable(&provider, m));

    if requested == ContentType::Json && is_json {
        let resource: Resource = serde_json::from_slice(body)
            .context("Server response is not a managed resource")?;
        provider
            .write_to(&resource, &mut out)
            .context("Failed to write managed resource")?;
        writeln!(out)?;
    } else {
        out.write_all(body)?;
    }
    out.flush()?;
    Ok(())
}
