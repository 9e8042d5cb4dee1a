//! Snippet conversion command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use vnode_jsx_data::{parse_snippet, Renderer};

use super::{read_snippet, to_json};
use crate::render::{JsonHost, VNode};

/// Render a snippet through an installed renderer.
pub fn convert_snippet(source: &str) -> Result<VNode> {
    let element = parse_snippet(source).context("Failed to read snippet")?;

    let mut renderer = Renderer::with_jsx(JsonHost::default());
    let node = element.render(&mut renderer);

    tracing::debug!("Created {} elements", renderer.host().elements);
    Ok(node)
}

/// Run the convert command.
pub fn run(snippet: Option<String>, file: Option<PathBuf>, pretty: bool) -> Result<()> {
    let source = read_snippet(snippet, file)?;
    let node = convert_snippet(&source)?;
    println!("{}", to_json(&node, pretty)?);
    Ok(())
}
