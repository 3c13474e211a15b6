//! Show command: the preview and code views of one component.

use anyhow::{Context, Result, bail};
use clap::Parser;
use meui_catalog::{ComponentSource, catalog};
use meui_syntax::{HighlightStats, Style, highlight};
use std::fmt::Write as _;
use std::io::Write;

use crate::cli::handlers::CommandContext;
use crate::output::{CodeFormat, write_lines};

/// Which view of the component to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    /// Heading, import snippet and token statistics (default)
    #[default]
    Preview,
    /// Highlighted source with line numbers
    Code,
}

/// Show a component's preview summary or highlighted source.
#[derive(Debug, Parser)]
pub struct ShowCommand {
    /// Component key or display name (default: the first component)
    #[arg(value_name = "COMPONENT")]
    pub component: Option<String>,

    /// View to show
    #[arg(long, value_enum, default_value_t = View::Preview)]
    pub view: View,

    /// Output format (code view only)
    #[arg(long, short = 'f', value_enum, default_value_t = CodeFormat::Auto)]
    pub format: CodeFormat,

    /// Hide the line-number gutter (code view only)
    #[arg(long)]
    pub no_line_numbers: bool,
}

/// Formats the preview view of a component.
pub fn format_preview(component: &ComponentSource, colorize: bool) -> String {
    let heading_style = Style::new().bold();
    let dim = Style::new().dim();
    let paint = |style: Style, text: &str| {
        if colorize {
            style.paint(text)
        } else {
            text.to_string()
        }
    };

    let lines = highlight(component.source());
    let stats = HighlightStats::from_lines(&lines);

    let mut out = String::new();
    let _ = writeln!(out, "{}", paint(heading_style, component.display_name()));
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", component.import_snippet());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}",
        paint(dim, &format!("{} lines, {} tokens", stats.lines, stats.total()))
    );
    let width = stats
        .non_zero()
        .map(|(kind, _)| kind.as_str().len())
        .max()
        .unwrap_or(0);
    for (kind, count) in stats.non_zero() {
        let _ = writeln!(out, "    {:<width$}  {count:>5}", kind.as_str());
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        paint(
            dim,
            &format!(
                "meui show {} --view code | meui copy {} | meui export {}",
                component.key(),
                component.key(),
                component.key()
            )
        )
    );
    out
}

impl ShowCommand {
    /// Rejects code-view flags given with the preview view.
    pub fn validate(&self) -> Result<()> {
        if self.view == View::Preview && (self.format != CodeFormat::Auto || self.no_line_numbers) {
            bail!("--format and --no-line-numbers apply only to --view code");
        }
        Ok(())
    }

    /// Run the show command.
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        self.validate()?;
        let component = match self.component.as_deref() {
            Some(key) => catalog().get(key)?,
            None => catalog()
                .first()
                .context("The component catalog is empty")?,
        };
        tracing::debug!(component = component.key(), view = ?self.view, "show");

        let mut stdout = std::io::stdout().lock();
        match self.view {
            View::Preview => {
                stdout
                    .write_all(format_preview(component, ctx.colorize()).as_bytes())
                    .context("Failed to write output")?;
            }
            View::Code => {
                let lines = highlight(component.source());
                let line_numbers = ctx.line_numbers && !self.no_line_numbers;
                write_lines(&mut stdout, &lines, self.format, line_numbers, ctx)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ShowCommand {
        ShowCommand::parse_from(std::iter::once("show").chain(args.iter().copied()))
    }

    #[test]
    fn test_code_flags_need_code_view() {
        assert!(parse(&["BookingBar"]).validate().is_ok());
        assert!(parse(&["BookingBar", "--view", "code", "--format", "plain"]).validate().is_ok());
        assert!(parse(&["--view", "code", "--no-line-numbers"]).validate().is_ok());

        let err = parse(&["BookingBar", "--format", "json"]).validate().unwrap_err();
        assert!(err.to_string().contains("--view code"));
        assert!(parse(&["--no-line-numbers"]).validate().is_err());
    }

    #[test]
    fn test_preview_plain() {
        let component = catalog().get("BookingBar").unwrap();
        let preview = format_preview(component, false);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines[0], "Booking Bar");
        assert_eq!(lines[2], "  import { BookingBar } from '@me-ui/react'");
        assert!(lines[4].starts_with(&format!("  {} lines, ", component.line_count())));
        assert!(preview.contains("    keyword"));
        assert!(preview.contains("meui copy BookingBar"));
        assert!(!preview.contains('\x1b'));
    }

    #[test]
    fn test_preview_colored() {
        let component = catalog().get("ThemeToggle").unwrap();
        let preview = format_preview(component, true);
        assert!(preview.starts_with("\x1b["));
        assert!(meui_syntax::strip_ansi(&preview).starts_with("Theme Toggle\n"));
    }
}
