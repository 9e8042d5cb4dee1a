//! CLI subcommands.

pub mod classify;
pub mod convert;
pub mod init;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// Read snippet source from the argument, a file, or stdin.
pub fn read_snippet(snippet: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(snippet) = snippet {
        return Ok(snippet);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read snippet from stdin")?;
    Ok(source)
}

/// Serialize command output as JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}
