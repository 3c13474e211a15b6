//! Token kind to style mapping.
//!
//! The lookup is fixed per kind: comments are muted and italic, punctuation
//! is neutral, plain text keeps the terminal default, and every other kind
//! gets its own accent color.

#![allow(clippy::unreadable_literal)] // Hex color values represent colors, not numbers
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods don't require must_use

use crate::style::{Color, ColorParseError, Style};
use crate::token::{KIND_COUNT, TokenKind, UnknownTokenKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A syntax highlighting theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    styles: [Style; KIND_COUNT],
}

impl Default for Theme {
    fn default() -> Self {
        Self::showcase()
    }
}

impl Theme {
    /// Creates a theme where every kind is unstyled.
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            styles: [Style::new(); KIND_COUNT],
        }
    }

    /// Dark theme matching the showcase code panel.
    pub fn showcase() -> Self {
        ThemeBuilder::named("showcase")
            .style(TokenKind::Comment, Style::new().fg(Color::from_u32(0x6A9955)).italic())
            .fg(TokenKind::Tag, Color::from_u32(0x569CD6))
            .fg(TokenKind::Attribute, Color::from_u32(0x9CDCFE))
            .fg(TokenKind::String, Color::from_u32(0xCE9178))
            .fg(TokenKind::Template, Color::from_u32(0xD7BA7D))
            .fg(TokenKind::Keyword, Color::from_u32(0xC586C0))
            .fg(TokenKind::Framework, Color::from_u32(0xDCDCAA))
            .fg(TokenKind::Number, Color::from_u32(0xB5CEA8))
            .fg(TokenKind::Operator, Color::from_u32(0x4EC9B0))
            .fg(TokenKind::Punctuation, Color::from_u32(0x808080))
            .build()
    }

    /// Theme for light terminal backgrounds.
    pub fn light() -> Self {
        ThemeBuilder::named("light")
            .style(TokenKind::Comment, Style::new().fg(Color::from_u32(0x008000)).italic())
            .fg(TokenKind::Tag, Color::from_u32(0x800000))
            .fg(TokenKind::Attribute, Color::from_u32(0xE50000))
            .fg(TokenKind::String, Color::from_u32(0xA31515))
            .fg(TokenKind::Template, Color::from_u32(0x0070C1))
            .fg(TokenKind::Keyword, Color::from_u32(0xAF00DB))
            .fg(TokenKind::Framework, Color::from_u32(0x795E26))
            .fg(TokenKind::Number, Color::from_u32(0x098658))
            .fg(TokenKind::Operator, Color::from_u32(0x267F99))
            .fg(TokenKind::Punctuation, Color::from_u32(0x333333))
            .build()
    }

    /// Looks up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "showcase" | "dark" => Some(Self::showcase()),
            "light" => Some(Self::light()),
            "plain" | "none" => Some(Self::plain()),
            _ => None,
        }
    }

    /// Names accepted by [`Theme::by_name`].
    pub const BUILTIN_NAMES: &'static [&'static str] = &["showcase", "light", "plain"];

    /// Returns the theme name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the style for a token kind.
    #[inline]
    pub fn get(&self, kind: TokenKind) -> Style {
        self.styles[kind as usize]
    }

    /// Sets the style for a token kind.
    #[inline]
    pub fn set(&mut self, kind: TokenKind, style: Style) {
        self.styles[kind as usize] = style;
    }

    /// Applies user overrides keyed by kind name.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, StyleSpec>) -> Result<Self, ThemeError> {
        for (key, spec) in overrides {
            let kind: TokenKind = key.parse()?;
            let style = spec.to_style().map_err(|source| ThemeError::InvalidColor {
                kind: key.clone(),
                source,
            })?;
            self.set(kind, style);
        }
        Ok(self)
    }
}

/// Errors raised while applying theme overrides.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The override key is not a token kind.
    #[error(transparent)]
    UnknownKind(#[from] UnknownTokenKind),

    /// The override color could not be parsed.
    #[error("invalid color for '{kind}': {source}")]
    InvalidColor {
        /// The token kind being overridden.
        kind: String,
        /// The underlying parse error.
        #[source]
        source: ColorParseError,
    },
}

/// A style as written in a configuration file.
///
/// Either a bare hex color (`"#C586C0"`) or a table with attributes
/// (`{ fg = "#6A9955", italic = true }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSpec {
    /// Foreground color only.
    Color(String),
    /// Color and attributes.
    Full {
        /// Foreground color.
        #[serde(default)]
        fg: Option<String>,
        /// Bold text.
        #[serde(default)]
        bold: bool,
        /// Italic text.
        #[serde(default)]
        italic: bool,
        /// Dimmed text.
        #[serde(default)]
        dim: bool,
        /// Underlined text.
        #[serde(default)]
        underline: bool,
    },
}

impl StyleSpec {
    /// Converts this override to a [`Style`].
    pub fn to_style(&self) -> Result<Style, ColorParseError> {
        match self {
            StyleSpec::Color(hex) => Ok(Style::new().fg(Color::from_hex(hex)?)),
            StyleSpec::Full {
                fg,
                bold,
                italic,
                dim,
                underline,
            } => {
                let mut style = Style::new();
                if let Some(hex) = fg {
                    style = style.fg(Color::from_hex(hex)?);
                }
                if *bold {
                    style = style.bold();
                }
                if *italic {
                    style = style.italic();
                }
                if *dim {
                    style = style.dim();
                }
                if *underline {
                    style = style.underline();
                }
                Ok(style)
            }
        }
    }
}

/// Builder for custom themes.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeBuilder {
    /// Starts from an unstyled theme named "custom".
    pub fn new() -> Self {
        Self::named("custom")
    }

    /// Starts from an unstyled theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        let mut theme = Theme::plain();
        theme.name = name.into();
        Self { theme }
    }

    /// Starts from an existing theme.
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Sets a full style for a kind.
    pub fn style(mut self, kind: TokenKind, style: Style) -> Self {
        self.theme.set(kind, style);
        self
    }

    /// Sets a foreground color for a kind.
    pub fn fg(self, kind: TokenKind, color: Color) -> Self {
        self.style(kind, Style::new().fg(color))
    }

    /// Sets an italic foreground color for a kind.
    pub fn italic(self, kind: TokenKind, color: Color) -> Self {
        self.style(kind, Style::new().fg(color).italic())
    }

    /// Sets a bold foreground color for a kind.
    pub fn bold(self, kind: TokenKind, color: Color) -> Self {
        self.style(kind, Style::new().fg(color).bold())
    }

    /// Builds the theme.
    pub fn build(self) -> Theme {
        self.theme
    }
}
