//! Writing highlighted lines to stdout.

use anyhow::{Context, Result};
use meui_syntax::{LineRecord, RenderOptions, render_ansi, render_plain};
use std::io::Write;

use crate::cli::handlers::CommandContext;

/// Output format for highlighted code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CodeFormat {
    /// ANSI colors when stdout is a colored terminal, plain otherwise (default)
    #[default]
    Auto,
    /// Always emit ANSI color sequences
    Ansi,
    /// Plain text with the line-number gutter
    Plain,
    /// Line records as JSON
    Json,
}

impl CodeFormat {
    /// Resolves `Auto` against the command context.
    pub fn resolve(self, ctx: &CommandContext) -> CodeFormat {
        match self {
            CodeFormat::Auto if ctx.colorize() => CodeFormat::Ansi,
            CodeFormat::Auto => CodeFormat::Plain,
            other => other,
        }
    }
}

/// Renders highlighted lines in the given format.
pub fn render_lines(
    lines: &[LineRecord],
    format: CodeFormat,
    line_numbers: bool,
    ctx: &CommandContext,
) -> Result<String> {
    let options = RenderOptions { line_numbers };
    let rendered = match format.resolve(ctx) {
        CodeFormat::Ansi => render_ansi(lines, &ctx.theme, options),
        CodeFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(lines).context("Failed to serialize line records")?;
            json.push('\n');
            json
        }
        CodeFormat::Plain | CodeFormat::Auto => render_plain(lines, options),
    };
    Ok(rendered)
}

/// Writes highlighted lines to `out`.
pub fn write_lines(
    out: &mut impl Write,
    lines: &[LineRecord],
    format: CodeFormat,
    line_numbers: bool,
    ctx: &CommandContext,
) -> Result<()> {
    let rendered = render_lines(lines, format, line_numbers, ctx)?;
    out.write_all(rendered.as_bytes())
        .context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ColorMode;
    use meui_syntax::{highlight, strip_ansi};
    use pretty_assertions::assert_eq;

    fn ctx(color: ColorMode) -> CommandContext {
        CommandContext {
            color,
            ..CommandContext::default()
        }
    }

    #[test]
    fn test_auto_follows_color_mode() {
        assert_eq!(CodeFormat::Auto.resolve(&ctx(ColorMode::Always)), CodeFormat::Ansi);
        assert_eq!(CodeFormat::Auto.resolve(&ctx(ColorMode::Never)), CodeFormat::Plain);
        assert_eq!(CodeFormat::Json.resolve(&ctx(ColorMode::Always)), CodeFormat::Json);
    }

    #[test]
    fn test_ansi_strips_to_plain() {
        let lines = highlight("const a = 1;\n// done");
        let ctx = ctx(ColorMode::Never);
        let ansi = render_lines(&lines, CodeFormat::Ansi, true, &ctx).unwrap();
        let plain = render_lines(&lines, CodeFormat::Plain, true, &ctx).unwrap();
        assert_ne!(ansi, plain);
        assert_eq!(strip_ansi(&ansi), plain);
    }

    #[test]
    fn test_json_is_line_records() {
        let lines = highlight("return x;");
        let json = render_lines(&lines, CodeFormat::Json, true, &ctx(ColorMode::Never)).unwrap();
        let parsed: Vec<LineRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lines);
        assert!(json.contains("\"kind\": \"keyword\""));
    }

    #[test]
    fn test_write_lines() {
        let lines = highlight("a\nb");
        let mut out = Vec::new();
        write_lines(&mut out, &lines, CodeFormat::Plain, false, &ctx(ColorMode::Never)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render_plain(&lines, RenderOptions { line_numbers: false }));
    }
}
