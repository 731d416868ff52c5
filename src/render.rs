//! Output helpers shared by the catalog CLI.
//!
//! Resolves the output format (flag, then `CLEAN_CODE_OUTPUT`, then text) and
//! renders table rows either as tab-separated text or as NDJSON objects.

use crate::catalog::{AttributeEntry, CatalogSnapshot};
use anyhow::{Context, Result};
use std::env;

pub const OUTPUT_ENV: &str = "CLEAN_CODE_OUTPUT";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name; anything other than `json`/`text` is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Default format requested through the environment.
    pub fn from_env() -> Self {
        env::var(OUTPUT_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Render a single table row in the requested format, without a newline.
pub fn render_entry(entry: &AttributeEntry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\t{}", entry.attribute, entry.category)),
        OutputFormat::Json => serde_json::to_string(entry)
            .with_context(|| format!("serializing entry for {}", entry.attribute)),
    }
}

pub fn render_entries<'a, I>(entries: I, format: OutputFormat) -> Result<String>
where
    I: IntoIterator<Item = &'a AttributeEntry>,
{
    let mut out = String::new();
    for entry in entries {
        out.push_str(&render_entry(entry, format)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn render_snapshot(snapshot: &CatalogSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("serializing catalog snapshot")
}

/// Split comma- or whitespace-delimited name lists into upper-cased tokens.
pub fn split_names(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}
