//! Export command: writes a component's original source to a file.

use anyhow::{Context, Result, bail};
use clap::Parser;
use meui_catalog::{ComponentSource, catalog};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::handlers::CommandContext;
use crate::styled_output::print_success;

/// Write a component's original source to a file.
#[derive(Debug, Parser)]
pub struct ExportCommand {
    /// Component key or display name
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// Output path; a directory gets `<Key>.jsx` inside it, `-` is stdout
    /// (default: `<Key>.jsx` in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Where an export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Standard output.
    Stdout,
    /// A file path.
    File(PathBuf),
}

/// Resolves the export target for a component.
pub fn resolve_target(component: &ComponentSource, output: Option<&Path>) -> ExportTarget {
    match output {
        Some(path) if path == Path::new("-") => ExportTarget::Stdout,
        Some(path) if path.is_dir() => ExportTarget::File(path.join(component.file_name())),
        Some(path) => ExportTarget::File(path.to_path_buf()),
        None => ExportTarget::File(PathBuf::from(component.file_name())),
    }
}

/// Writes the source verbatim to `path`.
pub fn export_to_file(component: &ComponentSource, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    std::fs::write(path, component.source())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = component.source().len(), "exported");
    Ok(())
}

impl ExportCommand {
    /// Run the export command.
    pub fn run(self, _ctx: &CommandContext) -> Result<()> {
        let component = catalog().get(&self.component)?;
        match resolve_target(component, self.output.as_deref()) {
            ExportTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(component.source().as_bytes())
                    .context("Failed to write output")?;
                stdout.flush().context("Failed to flush output")?;
            }
            ExportTarget::File(path) => {
                export_to_file(component, &path, self.force)?;
                print_success(&format!(
                    "Exported {} to {}",
                    component.display_name(),
                    path.display()
                ));
            }
        }
        Ok(())
    }
}
