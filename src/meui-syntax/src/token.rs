//! Token types produced by the line tokenizer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// A byte range within a single source line.
pub type ByteRange = Range<usize>;

/// Number of token kinds.
pub const KIND_COUNT: usize = 11;

/// Classification tag attached to every token.
///
/// The set is closed: renderers and themes can match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A `//` line comment covering the rest of the line.
    Comment,
    /// Markup angle-bracket tokens: `<div`, `</div>`, `>`, `/>`.
    Tag,
    /// A `${...}` interpolation.
    Template,
    /// A double, single, or backtick quoted literal.
    String,
    /// A reserved word such as `const` or `return`.
    Keyword,
    /// A framework hook or helper name such as `useState`.
    Framework,
    /// A numeric literal.
    Number,
    /// A markup attribute name directly followed by `=`.
    Attribute,
    /// The arrow operator `=>`.
    Operator,
    /// One of `{ } ( ) [ ] ; , =`.
    Punctuation,
    /// Anything no other rule claimed.
    Plain,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; KIND_COUNT] = [
        TokenKind::Comment,
        TokenKind::Tag,
        TokenKind::Template,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Framework,
        TokenKind::Number,
        TokenKind::Attribute,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Plain,
    ];

    /// Returns the stable lowercase name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Tag => "tag",
            TokenKind::Template => "template",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Framework => "framework",
            TokenKind::Number => "number",
            TokenKind::Attribute => "attribute",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown token kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind: {0}")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// A classified slice of one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The classification of this token.
    pub kind: TokenKind,
    /// The exact text this token covers.
    pub value: String,
    /// The byte range of `value` within its line.
    pub range: ByteRange,
}

impl Token {
    /// Creates a new token.
    #[inline]
    pub fn new(kind: TokenKind, value: impl Into<String>, range: ByteRange) -> Self {
        Self {
            kind,
            value: value.into(),
            range,
        }
    }

    /// Creates a `plain` token.
    #[inline]
    pub fn plain(value: impl Into<String>, range: ByteRange) -> Self {
        Self::new(TokenKind::Plain, value, range)
    }

    /// Returns the length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the token covers no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// One tokenized source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// 1-based position of the line in the source.
    pub line_number: usize,
    /// Tokens covering the line, left to right.
    pub tokens: Vec<Token>,
}

impl LineRecord {
    /// Creates a line record.
    pub fn new(line_number: usize, tokens: Vec<Token>) -> Self {
        Self {
            line_number,
            tokens,
        }
    }

    /// Reconstructs the line text by concatenating token values.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }

    /// Returns true if the line has no tokens (an empty source line).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns an iterator over the tokens.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}
