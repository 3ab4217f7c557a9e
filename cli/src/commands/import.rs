//! # Portal Objects Import Handler
//!
//! File: cli/src/commands/import.rs
//!
//! ## Overview
//!
//! Implements `portal-mgmt import`, which pushes a portal objects export
//! archive (sites, pages, navigations) into a portal container on a remote
//! server.
//!
//! ## Architecture
//!
//! 1. Resolve the portal container (flag, config file, or prompt).
//! 2. Create a management client bound to host:port, credentials and container.
//! 3. Resolve the import file (flag or prompt). A missing file is fatal.
//! 4. Resolve the overwrite decision (flag or prompt, `Y` means yes).
//! 5. Overwriting without `--force` asks for a second confirmation. Declining
//!    ends the command successfully without importing.
//! 6. Upload the archive; the server answers with the parsed `ImportContext`.
//! 7. An empty context ends the command successfully ("nothing to import").
//! 8. Otherwise set the overwrite flag on the context and run the import.
//!
//! Client failures in steps 6-8 are logged with their cause chain and reported
//! as `ImportOutcome::Failed`, which exits with status 2.
//!
//! ## Usage
//!
//! ```bash
//! # Fully interactive
//! portal-mgmt import
//!
//! # Everything on the command line, no questions asked
//! portal-mgmt import -h portal.local --port 8080 -u root -p gtn \
//!     --portalcontainer portal --importfile site.zip --overwrite true --force
//! ```
//!
use crate::{
    common::{
        args::ConnectionArgs,
        client::{ClientFactory, HttpClientFactory, MgmtClientError, PortalObjectsMgmtClient},
        ui::{is_yes, ConsolePrompter, InputProvider},
    },
    core::{
        config::{self, ConnectionSettings},
        error::{PortalMgmtError, Result},
    },
};
use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Exit status when the remote import failed.
pub const EXIT_IMPORT_FAILED: i32 = 2;

const CONTAINER_PROMPT: &str = "Container name (ie portal)";
const IMPORT_FILE_PROMPT: &str = "Import file";
const OVERWRITE_PROMPT: &str =
    "Do you wish to fully overwrite all data defined in import file (N) ? Y/N";
const PROCEED_PROMPT: &str = "Do you wish to proceed (N) ? Y/N";

/// # Import Arguments (`ImportArgs`)
#[derive(Parser, Debug)]
#[command(
    about = "Import a portal objects archive into a portal container",
    disable_help_flag = true
)]
pub struct ImportArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Portal container name (ie portal).
    #[arg(long = "portalcontainer", visible_alias = "pc", value_name = "NAME")]
    pub portal_container: Option<String>,

    /// The import file to be imported.
    #[arg(long = "importfile", visible_alias = "file", value_name = "FILE")]
    pub import_file: Option<PathBuf>,

    /// Indicates that the contents of each file should overwrite everything on
    /// the destination server. This also means that anything not included will be deleted.
    /// Accepts `true` or `y` in any case, the same answers as the prompt.
    #[arg(long, short = 'o', value_name = "true|false")]
    pub overwrite: Option<String>,

    /// Force all options without confirmation.
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// Everything the import flow needs once flags and config are resolved.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub settings: ConnectionSettings,
    pub import_file: Option<PathBuf>,
    pub overwrite: Option<String>,
    pub force: bool,
    /// Indentation level of prompts.
    pub level: usize,
}

/// How an import run ended.
#[derive(Debug)]
pub enum ImportOutcome {
    Imported,
    Declined,
    NothingToImport,
    Failed(anyhow::Error),
}

impl ImportOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            ImportOutcome::Failed(_) => EXIT_IMPORT_FAILED,
            _ => 0,
        }
    }
}

/// Trims a container name and rejects blank names or names with a `/`.
fn validate_container(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() || name.contains('/') {
        return Err(PortalMgmtError::Config(format!("Invalid portal container name '{}'.", name)).into());
    }
    Ok(name.to_string())
}

/// Parses an overwrite answer or flag value: `true` or `y`, any case.
fn parse_overwrite(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || is_yes(value)
}

/// # Handle Import Command (`handle_import`)
///
/// Resolves the connection settings, then runs the import against the real
/// HTTP client with prompts on stdin/stdout.
pub async fn handle_import(args: ImportArgs) -> Result<ImportOutcome> {
    info!(
        "Handling import command (Container: {:?}, File: {:?}, Overwrite: {:?}, Force: {})",
        args.portal_container, args.import_file, args.overwrite, args.force
    );

    let settings = args.connection.resolve(args.portal_container.clone())?;
    let factory = HttpClientFactory {
        timeout: settings.timeout,
    };
    let request = ImportRequest {
        settings,
        import_file: args.import_file,
        overwrite: args.overwrite,
        force: args.force,
        level: 0,
    };
    let mut input = ConsolePrompter::stdio();
    run_import(request, &factory, &mut input).await
}

/// Runs the import flow with an injected client factory and input provider.
pub async fn run_import<F, I>(request: ImportRequest, factory: &F, input: &mut I) -> Result<ImportOutcome>
where
    F: ClientFactory,
    I: InputProvider,
{
    let level = request.level;
    let settings = &request.settings;

    let container = match &settings.portal_container {
        Some(name) => name.clone(),
        None => input.read_input(CONTAINER_PROMPT, level)?,
    };
    let container = validate_container(&container)?;

    let client = factory
        .create(
            &settings.host,
            settings.port,
            settings.username.as_deref(),
            settings.password.as_deref(),
            &container,
        )
        .with_context(|| {
            format!(
                "Failed to create management client for {}:{}",
                settings.host, settings.port
            )
        })?;

    let import_file = match request.import_file {
        Some(path) => path,
        None => PathBuf::from(input.read_input(IMPORT_FILE_PROMPT, level)?),
    };
    let import_file = config::expand_path(&import_file);
    if !import_file.exists() {
        return Err(PortalMgmtError::ImportFileNotFound { path: import_file }.into());
    }

    let overwrite = match request.overwrite.as_deref() {
        Some(value) => parse_overwrite(value),
        None => parse_overwrite(&input.read_input(OVERWRITE_PROMPT, level)?),
    };

    if overwrite && !request.force {
        println!(
            "\nOverwrite set to true. This means that all data for a site will be overwritten and any data not defined will be deleted."
        );
        if !input.confirm(PROCEED_PROMPT, level)? {
            info!("Overwrite not confirmed, nothing imported.");
            return Ok(ImportOutcome::Declined);
        }
    }

    match submit(&client, &import_file, overwrite).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            let report = anyhow::Error::new(e)
                .context(format!("Failed to import {}", import_file.display()));
            debug!("Import failed: {:?}", report);
            eprintln!("Error: {:#}", report);
            Ok(ImportOutcome::Failed(report))
        }
    }
}

async fn submit<C: PortalObjectsMgmtClient>(
    client: &C,
    import_file: &Path,
    overwrite: bool,
) -> std::result::Result<ImportOutcome, MgmtClientError> {
    let mut context = client.import_from_zip(import_file).await?;
    if context.is_empty() {
        warn!("Archive {} is empty.", import_file.display());
        println!(
            "Nothing to import. {} did not contain anything to import.",
            import_file.display()
        );
        return Ok(ImportOutcome::NothingToImport);
    }

    context.set_overwrite(overwrite);
    client.import_context(&context).await?;
    println!(
        "Imported {} portal configs, {} pages and {} navigations from {}.",
        context.portal_configs().len(),
        context.pages().len(),
        context.navigations().len(),
        import_file.display()
    );
    Ok(ImportOutcome::Imported)
}
