//! Builds `metadata.json` for a tree of tagged songs and their lyric files.
//!
//! Usage: `lirik-index [PROJECT_ROOT]`. Everything else comes from the user
//! config, the project's `lirik-index.toml` and `LIRIK_INDEX__*` environment
//! variables (see [`config`]).

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod error;

fn load_settings(project_root: Option<&Path>) -> Result<config::Settings> {
    let settings = match config::Settings::load(project_root) {
        Ok(s) => s,
        Err(e) => {
            // Config is optional; a broken file should not block a rebuild.
            warn!("failed to load config, using defaults: {e}");
            let mut s = config::Settings::default();
            if let Some(root) = project_root {
                s.catalog.project_root = root.to_path_buf();
            }
            s
        }
    };

    if let Err(msg) = settings.validate() {
        bail!("invalid config: {msg}");
    }
    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let project_root = env::args_os().nth(1).map(PathBuf::from);
    let settings = load_settings(project_root.as_deref())?;

    info!(
        "scanning {} (base url {})",
        settings.catalog.audio_root().display(),
        settings.catalog.base_url
    );

    catalog::build_catalog(&settings.catalog, &settings.scan).with_context(|| {
        format!(
            "failed to build catalog {}",
            settings.catalog.output_path().display()
        )
    })?;

    Ok(())
}
