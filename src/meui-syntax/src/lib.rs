//! Token highlighter for the Me-UI showcase.
//!
//! Turns JSX source into lines of classified tokens for display. The
//! highlighter is a best-effort pattern scanner, not a parser: it never
//! fails, and code outside its pattern coverage degrades to `plain` tokens.
//!
//! # Architecture
//!
//! - [`rules`]: the priority-ordered classification table
//! - [`tokenizer`]: scans one line into [`Token`]s
//! - [`lines`]: splits source text into lines
//! - [`highlight()`]: composes the two into numbered [`LineRecord`]s
//! - [`Theme`]: maps each [`TokenKind`] to a [`Style`]
//! - [`render`]: gutter-and-code text renderers
//!
//! # Example
//!
//! ```rust
//! use meui_syntax::{highlight, TokenKind};
//!
//! let lines = highlight("const [open, setOpen] = useState(false);");
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(lines[0].text(), "const [open, setOpen] = useState(false);");
//! ```
//!
//! # Themes
//!
//! ```rust
//! use meui_syntax::{Color, Theme, ThemeBuilder, TokenKind};
//!
//! let dark = Theme::showcase(); // Default
//! let light = Theme::light();
//!
//! let custom = ThemeBuilder::new()
//!     .fg(TokenKind::Keyword, Color::rgb(0x56, 0x9C, 0xD6))
//!     .italic(TokenKind::Comment, Color::rgb(0x6A, 0x99, 0x55))
//!     .build();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod highlight;
pub mod lines;
pub mod render;
pub mod rules;
pub mod style;
pub mod theme;
pub mod token;
pub mod tokenizer;

// Re-export main types at crate root
pub use highlight::{highlight, HighlightStats, Highlighter, StatsSummary};
pub use lines::{line_count, split_lines};
pub use render::{render_ansi, render_plain, strip_ansi, RenderOptions};
pub use style::{Color, ColorParseError, Style, TextAttributes};
pub use theme::{StyleSpec, Theme, ThemeBuilder, ThemeError};
pub use token::{ByteRange, LineRecord, Token, TokenKind, UnknownTokenKind};
pub use tokenizer::{is_comment_line, tokenize_line};
