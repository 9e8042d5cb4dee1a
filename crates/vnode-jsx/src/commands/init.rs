//! Write a default config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::default_config_toml;

/// Run the init command.
pub fn run(path: &Path, yes: bool) -> Result<()> {
    if path.exists() && !yes {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, default_config_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}
