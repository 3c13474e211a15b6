//! Text renderers for highlighted lines.
//!
//! Each rendered line is a right-aligned line-number gutter, a separator, and
//! the line's tokens written back to back. No whitespace is inserted between
//! tokens, so the body of every rendered line equals the source line.

use crate::style::{Color, RESET, Style};
use crate::theme::Theme;
use crate::token::LineRecord;
use std::fmt::Write;

/// Separator between the gutter and the code.
pub const GUTTER_SEPARATOR: &str = " │ ";

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the line-number gutter.
    pub line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}

/// Width in columns of the widest line number.
pub fn gutter_width(lines: &[LineRecord]) -> usize {
    let max = lines.iter().map(|l| l.line_number).max().unwrap_or(1);
    max.to_string().len()
}

fn gutter_style() -> Style {
    Style::new().fg(Color::from_u32(0x858585))
}

/// Renders lines without any escape sequences.
pub fn render_plain(lines: &[LineRecord], options: RenderOptions) -> String {
    let width = gutter_width(lines);
    let mut out = String::new();
    for line in lines {
        if options.line_numbers {
            let _ = write!(out, "{:>width$}{}", line.line_number, GUTTER_SEPARATOR);
        }
        for token in line.iter() {
            out.push_str(&token.value);
        }
        out.push('\n');
    }
    out
}

/// Renders lines with ANSI colors from `theme`.
pub fn render_ansi(lines: &[LineRecord], theme: &Theme, options: RenderOptions) -> String {
    let width = gutter_width(lines);
    let gutter = gutter_style();
    let mut out = String::new();
    for line in lines {
        if options.line_numbers {
            let number = format!("{:>width$}", line.line_number);
            out.push_str(&gutter.paint(&number));
            out.push_str(&gutter.paint(GUTTER_SEPARATOR));
        }
        for token in line.iter() {
            out.push_str(&theme.get(token.kind).paint(&token.value));
        }
        out.push('\n');
    }
    out
}

/// Removes the SGR sequences written by [`render_ansi`].
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        result.push(c);
    }

    result
}

/// Returns true if `s` contains a reset sequence, i.e. was styled.
pub fn is_styled(s: &str) -> bool {
    s.contains(RESET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_with_gutter() {
        let source = (1..=10).map(|i| format!("x{i}")).collect::<Vec<_>>().join("\n");
        let out = render_plain(&highlight(&source), RenderOptions::default());
        let rendered: Vec<&str> = out.lines().collect();
        assert_eq!(rendered[0], " 1 │ x1");
        assert_eq!(rendered[9], "10 │ x10");
    }

    #[test]
    fn test_plain_without_gutter_is_source() {
        let source = "const a = 1;\n\n  <div className=\"x\">";
        let out = render_plain(&highlight(source), RenderOptions { line_numbers: false });
        assert_eq!(out, format!("{source}\n"));
    }

    #[test]
    fn test_ansi_strips_to_plain() {
        let source = "import { useState } from \"react\";\n// done";
        let lines = highlight(source);
        let ansi = render_ansi(&lines, &Theme::showcase(), RenderOptions::default());
        assert!(is_styled(&ansi));
        assert_eq!(strip_ansi(&ansi), render_plain(&lines, RenderOptions::default()));
    }

    #[test]
    fn test_plain_theme_body_has_no_escapes() {
        let lines = highlight("let x = 1;");
        let out = render_ansi(&lines, &Theme::plain(), RenderOptions { line_numbers: false });
        assert_eq!(out, "let x = 1;\n");
    }

    #[test]
    fn test_gutter_width() {
        assert_eq!(gutter_width(&highlight("a")), 1);
        assert_eq!(gutter_width(&highlight(&"\n".repeat(99))), 3);
        assert_eq!(gutter_width(&[]), 1);
    }
}
