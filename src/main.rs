//! Entry point for the slice labeler.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load the session manifest via `manifest`.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application with the loaded session and config.

mod api;
mod app;
mod cache;
mod config;
mod interaction;
mod manifest;
mod thumburl;
mod viewer;

use crate::app::run_app;
use crate::cache::{load_multiplier, load_resume_element};
use crate::config::load_config;
use crate::manifest::load_manifest;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let manifest_path = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        manifest = %manifest_path.display(),
        server = %config.server_url,
        level = %config.log_level,
        "Starting slice labeler"
    );

    let manifest = load_manifest(&manifest_path)?;
    let multiplier = load_multiplier(&manifest_path);
    if multiplier != 1.0 {
        info!(multiplier, "Restoring cached intensity multiplier");
    }
    let resume_element = load_resume_element(&manifest_path);
    if let Some(element) = resume_element {
        info!(element, "Resuming from cached element");
    }

    run_app(manifest, manifest_path, config, multiplier, resume_element)
        .context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow!("Usage: slice-labeler <path-to-session-manifest.json>"))?;

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    }
}
