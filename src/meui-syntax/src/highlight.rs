//! Source-level highlighting.
//!
//! Splits source text into lines and tokenizes each line on its own; no state
//! is carried from one line to the next. Every function here is total: any
//! input produces output, and the same input always produces the same output.

use crate::lines::split_lines;
use crate::style::Style;
use crate::theme::Theme;
use crate::token::{KIND_COUNT, LineRecord, TokenKind};
use crate::tokenizer::tokenize_line;
use serde::Serialize;
use std::fmt;

/// Highlights a whole source text.
///
/// Returns one [`LineRecord`] per line, numbered from 1 in source order.
pub fn highlight(source: &str) -> Vec<LineRecord> {
    let lines: Vec<LineRecord> = split_lines(source)
        .enumerate()
        .map(|(idx, line)| LineRecord::new(idx + 1, tokenize_line(line)))
        .collect();

    tracing::debug!(
        bytes = source.len(),
        lines = lines.len(),
        "highlighted source"
    );
    lines
}

/// A highlighter bound to a theme.
///
/// Holds no per-call state, so one value can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    theme: Theme,
}

impl Highlighter {
    /// Creates a highlighter with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a highlighter with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the theme.
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Highlights source text into line records.
    pub fn highlight(&self, source: &str) -> Vec<LineRecord> {
        highlight(source)
    }

    /// Highlights source text and resolves each token's style.
    ///
    /// Each inner vector holds `(style, text)` pairs for one line.
    pub fn highlight_styled<'a>(&self, lines: &'a [LineRecord]) -> Vec<Vec<(Style, &'a str)>> {
        lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|token| (self.theme.get(token.kind), token.value.as_str()))
                    .collect()
            })
            .collect()
    }
}

/// Token counts per kind for a highlighted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightStats {
    counts: [usize; KIND_COUNT],
    /// Number of lines.
    pub lines: usize,
}

impl HighlightStats {
    /// Collects stats from highlighted lines.
    pub fn from_lines(lines: &[LineRecord]) -> Self {
        let mut stats = Self {
            lines: lines.len(),
            ..Self::default()
        };
        for token in lines.iter().flat_map(LineRecord::iter) {
            stats.counts[token.kind as usize] += 1;
        }
        stats
    }

    /// Returns the number of tokens of one kind.
    #[inline]
    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts[kind as usize]
    }

    /// Returns the total number of tokens.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns `(kind, count)` for every kind with at least one token.
    pub fn non_zero(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL
            .iter()
            .map(|&kind| (kind, self.count(kind)))
            .filter(|&(_, count)| count > 0)
    }
}

impl fmt::Display for HighlightStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lines, {} tokens", self.lines, self.total())?;
        for (kind, count) in self.non_zero() {
            write!(f, ", {kind}: {count}")?;
        }
        Ok(())
    }
}

/// Serializable form of [`HighlightStats`], keyed by kind name.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    /// Number of lines.
    pub lines: usize,
    /// Number of tokens.
    pub tokens: usize,
    /// Token count per kind name, zero counts omitted.
    pub kinds: std::collections::BTreeMap<&'static str, usize>,
}

impl From<&HighlightStats> for StatsSummary {
    fn from(stats: &HighlightStats) -> Self {
        Self {
            lines: stats.lines,
            tokens: stats.total(),
            kinds: stats.non_zero().map(|(k, c)| (k.as_str(), c)).collect(),
        }
    }
}
