//! Single-line tokenizer.
//!
//! Scans a line left to right. At each position the classification table in
//! [`crate::rules`] is consulted; if nothing matches, a fallback `plain`
//! token is taken so the scan always advances. The tokens partition the
//! line exactly: concatenating their values gives the input back.

use crate::rules::{classify, fallback_len};
use crate::token::{Token, TokenKind};

/// Marker that turns a whole line into a comment.
const COMMENT_MARKER: &str = "//";

/// Returns true if the line is a `//` comment line.
///
/// Only a marker at the start of the line (after indentation) counts. A
/// marker after code on the same line is tokenized like any other text.
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

/// Tokenizes a single line of source text.
///
/// `line` should not contain a newline; if it does, the newline is kept as a
/// `plain` token like any other character.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    if line.is_empty() {
        return Vec::new();
    }

    if is_comment_line(line) {
        return vec![Token::new(TokenKind::Comment, line, 0..line.len())];
    }

    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        let (kind, len) = classify(rest).unwrap_or_else(|| (TokenKind::Plain, fallback_len(rest)));
        let end = pos + len;
        tokens.push(Token::new(kind, &line[pos..end], pos..end));
        pos = end;
    }

    tracing::trace!(len = line.len(), tokens = tokens.len(), "tokenized line");
    tokens
}

/// Tokenizes a line and returns only the kinds, in order.
pub fn token_kinds(line: &str) -> Vec<TokenKind> {
    tokenize_line(line).into_iter().map(|t| t.kind).collect()
}
