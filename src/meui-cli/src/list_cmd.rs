//! List command: the component sidebar.

use anyhow::{Context, Result};
use clap::Parser;
use meui_catalog::{Catalog, catalog};
use serde::Serialize;
use std::io::Write;

use crate::cli::handlers::CommandContext;

/// List the showcase components.
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the component keys, one per line
    #[arg(long, short = 'q', conflicts_with = "json")]
    pub quiet: bool,
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Lookup key.
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Number of source lines.
    pub lines: usize,
    /// Import statement.
    pub import: String,
}

/// Collects the listing rows in sidebar order.
pub fn list_entries(catalog: &Catalog) -> Vec<ListEntry> {
    catalog
        .iter()
        .map(|c| ListEntry {
            key: c.key().to_string(),
            name: c.display_name().to_string(),
            lines: c.line_count(),
            import: c.import_snippet(),
        })
        .collect()
}

/// Formats the listing as an aligned table.
pub fn format_table(entries: &[ListEntry]) -> String {
    let key_width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0).max(3);
    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0).max(4);

    let mut out = format!(
        "{:<key_width$}  {:<name_width$}  {:>5}\n",
        "KEY", "NAME", "LINES"
    );
    for entry in entries {
        out.push_str(&format!(
            "{:<key_width$}  {:<name_width$}  {:>5}\n",
            entry.key, entry.name, entry.lines
        ));
    }
    out
}

impl ListCommand {
    /// Run the list command.
    pub fn run(self, _ctx: &CommandContext) -> Result<()> {
        let entries = list_entries(catalog());
        let rendered = if self.json {
            let mut json =
                serde_json::to_string_pretty(&entries).context("Failed to serialize listing")?;
            json.push('\n');
            json
        } else if self.quiet {
            entries.iter().map(|e| format!("{}\n", e.key)).collect()
        } else {
            format_table(&entries)
        };

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .context("Failed to write output")?;
        Ok(())
    }
}
