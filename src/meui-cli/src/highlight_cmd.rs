//! Highlight command: tokenizes an arbitrary JSX file or stdin.

use anyhow::{Context, Result};
use clap::Parser;
use meui_syntax::{HighlightStats, LineRecord, StatsSummary, highlight};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::cli::handlers::CommandContext;
use crate::output::{CodeFormat, write_lines};
use crate::styled_output::{print_dim, print_info};

/// Highlight any JSX file (or stdin).
#[derive(Debug, Parser)]
pub struct HighlightCommand {
    /// File to highlight; `-` or absent reads stdin
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = CodeFormat::Auto)]
    pub format: CodeFormat,

    /// Hide the line-number gutter
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Print token statistics to stderr (as JSON with `--format json`)
    #[arg(long)]
    pub stats: bool,
}

/// Reads the whole input as UTF-8.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            if std::io::stdin().is_terminal() {
                print_info("Reading from stdin (Ctrl-D to finish)");
            }
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Formats token statistics, as a JSON object when `json` is set.
pub fn format_stats(lines: &[LineRecord], json: bool) -> Result<String> {
    let stats = HighlightStats::from_lines(lines);
    if json {
        serde_json::to_string(&StatsSummary::from(&stats)).context("Failed to serialize stats")
    } else {
        Ok(stats.to_string())
    }
}

impl HighlightCommand {
    /// Run the highlight command.
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let source = read_input(self.file.as_deref())?;
        let lines = highlight(&source);

        let line_numbers = ctx.line_numbers && !self.no_line_numbers;
        let mut stdout = std::io::stdout().lock();
        write_lines(&mut stdout, &lines, self.format, line_numbers, ctx)?;

        if self.stats {
            let json = self.format.resolve(ctx) == CodeFormat::Json;
            let stats = format_stats(&lines, json)?;
            if json {
                eprintln!("{stats}");
            } else {
                print_dim(&stats);
            }
        }
        Ok(())
    }
}
