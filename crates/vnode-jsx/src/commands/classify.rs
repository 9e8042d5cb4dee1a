//! Prop classification command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use vnode_jsx_data::{apply_dom_props_overrides, classify_keys, parse_snippet};

use super::{read_snippet, to_json};

/// Classify the root element's props, after DOM property overrides.
pub fn classify_snippet(source: &str, pretty: bool) -> Result<String> {
    let element = parse_snippet(source).context("Failed to read snippet")?;

    let props = apply_dom_props_overrides(&element.tag, element.props);
    let keys = classify_keys(&props);

    to_json(&keys, pretty)
}

/// Run the classify command.
pub fn run(snippet: Option<String>, file: Option<PathBuf>, pretty: bool) -> Result<()> {
    let source = read_snippet(snippet, file)?;
    println!("{}", classify_snippet(&source, pretty)?);
    Ok(())
}
