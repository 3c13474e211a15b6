//! TOML configuration for the showcase CLI.
//!
//! Looked up at `--config <path>` / `MEUI_CONFIG`, or else at
//! `<config dir>/meui/config.toml`. A missing default file means defaults;
//! a missing explicit file is an error.
//!
//! ```toml
//! theme = "showcase"
//! line_numbers = true
//!
//! [colors]
//! keyword = "#C586C0"
//! comment = { fg = "#6A9955", italic = true }
//! ```

use meui_syntax::{StyleSpec, Theme, ThemeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The theme name is not a built-in theme.
    #[error("Unknown theme '{0}' (expected one of: {list})", list = Theme::BUILTIN_NAMES.join(", "))]
    UnknownTheme(String),

    /// A color override is invalid.
    #[error("Invalid [colors] entry: {0}")]
    Theme(#[from] ThemeError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in theme name.
    pub theme: Option<String>,

    /// Draw the line-number gutter in code views.
    pub line_numbers: Option<bool>,

    /// Per-kind style overrides.
    pub colors: BTreeMap<String, StyleSpec>,
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meui").join(CONFIG_FILE_NAME))
    }

    /// Load the explicit file if given, else the default file if it exists.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build the theme: `cli_theme` wins over the file's `theme`, then
    /// `[colors]` overrides are applied.
    pub fn resolve_theme(&self, cli_theme: Option<&str>) -> ConfigResult<Theme> {
        let name = cli_theme.or(self.theme.as_deref()).unwrap_or("showcase");
        let theme = Theme::by_name(name).ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))?;
        Ok(theme.with_overrides(&self.colors)?)
    }

    /// Whether code views draw line numbers.
    pub fn line_numbers(&self) -> bool {
        self.line_numbers.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meui_syntax::{Color, TokenKind};
    use std::io::Write;

    fn parse(content: &str) -> ConfigResult<Config> {
        Config::parse(content, Path::new("test.toml"))
    }

    #[test]
    fn test_empty_config() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.line_numbers());
        assert_eq!(config.resolve_theme(None).unwrap().name(), "showcase");
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r##"
theme = "light"
line_numbers = false

[colors]
keyword = "#010203"
comment = { fg = "#00FF00", italic = true }
"##,
        )
        .unwrap();
        assert!(!config.line_numbers());

        let theme = config.resolve_theme(None).unwrap();
        assert_eq!(theme.name(), "light");
        assert_eq!(theme.get(TokenKind::Keyword).fg, Some(Color::rgb(1, 2, 3)));
        assert_eq!(theme.get(TokenKind::Comment).fg, Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn test_cli_theme_wins() {
        let config = parse("theme = \"light\"").unwrap();
        assert_eq!(config.resolve_theme(Some("plain")).unwrap().name(), "plain");
    }

    #[test]
    fn test_unknown_theme() {
        let config = parse("theme = \"solarized\"").unwrap();
        let err = config.resolve_theme(None).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme(ref name) if name == "solarized"));
        assert!(err.to_string().contains("showcase, light, plain"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let config = parse("[colors]\nidentifier = \"#fff\"").unwrap();
        assert!(matches!(config.resolve_theme(None), Err(ConfigError::Theme(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            parse("themes = \"light\""),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "line_numbers = false").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.line_numbers, Some(false));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::ReadError { .. })
        ));
    }
}
