//! Colors and text styles for rendered tokens.
//!
//! Colors are 24-bit RGB and are written to terminals as SGR truecolor
//! sequences (`ESC[38;2;R;G;Bm`).

use bitflags::bitflags;
use std::fmt;
use std::io::Write;
use thiserror::Error;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty color string")]
    EmptyInput,

    /// Hex string had an unsupported length.
    #[error("invalid hex color length: {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),

    /// Hex string contained a non-hex character.
    #[error("invalid hex digit in color: {0}")]
    InvalidHexChar(String),
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Creates a color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parses `#RGB` or `#RRGGBB` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());

        if digits.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexChar(hex.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| ColorParseError::InvalidHexChar(hex.to_string()))
        };

        Ok(Self::rgb(component(0..2)?, component(2..4)?, component(4..6)?))
    }

    /// Formats the color as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

bitflags! {
    /// Text attributes applied on top of the foreground color.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttributes: u8 {
        /// Bold text.
        const BOLD = 1 << 0;
        /// Dimmed text.
        const DIM = 1 << 1;
        /// Italic text.
        const ITALIC = 1 << 2;
        /// Underlined text.
        const UNDERLINE = 1 << 3;
    }
}

impl TextAttributes {
    /// Writes the SGR sequences for these attributes.
    pub fn write_ansi(&self, buf: &mut Vec<u8>) {
        if self.contains(Self::BOLD) {
            buf.extend_from_slice(b"\x1b[1m");
        }
        if self.contains(Self::DIM) {
            buf.extend_from_slice(b"\x1b[2m");
        }
        if self.contains(Self::ITALIC) {
            buf.extend_from_slice(b"\x1b[3m");
        }
        if self.contains(Self::UNDERLINE) {
            buf.extend_from_slice(b"\x1b[4m");
        }
    }
}

/// Sequence that clears every style.
pub const RESET: &str = "\x1b[0m";

/// A foreground color plus attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color; `None` keeps the terminal default.
    pub fg: Option<Color>,
    /// Text attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Creates an empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Sets the foreground color.
    #[inline]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Adds bold.
    #[inline]
    pub fn bold(mut self) -> Self {
        self.attributes |= TextAttributes::BOLD;
        self
    }

    /// Adds dim.
    #[inline]
    pub fn dim(mut self) -> Self {
        self.attributes |= TextAttributes::DIM;
        self
    }

    /// Adds italic.
    #[inline]
    pub fn italic(mut self) -> Self {
        self.attributes |= TextAttributes::ITALIC;
        self
    }

    /// Adds underline.
    #[inline]
    pub fn underline(mut self) -> Self {
        self.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Returns true if the style changes nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.attributes.is_empty()
    }

    /// Writes the SGR sequences for this style.
    pub fn write_ansi(&self, buf: &mut Vec<u8>) {
        if let Some(fg) = self.fg {
            let _ = write!(buf, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
        }
        self.attributes.write_ansi(buf);
    }

    /// Returns the SGR sequences for this style as a string.
    pub fn to_ansi(&self) -> String {
        let mut buf = Vec::new();
        self.write_ansi(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Wraps `text` in this style followed by a reset.
    ///
    /// Empty styles and empty text are returned unchanged.
    pub fn paint(&self, text: &str) -> String {
        if self.is_empty() || text.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", self.to_ansi(), text, RESET)
    }
}
