//! CLI argument structures and parsing.
//!
//! Defines all command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

use super::styles::{AFTER_HELP, get_styles};
use crate::copy_cmd::CopyCommand;
use crate::export_cmd::ExportCommand;
use crate::highlight_cmd::HighlightCommand;
use crate::list_cmd::ListCommand;
use crate::show_cmd::ShowCommand;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Color output mode for CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Automatically detect if output is a terminal
    #[default]
    Auto,
    /// Always output with colors
    Always,
    /// Never output with colors
    Never,
}

impl ColorMode {
    /// Decide whether stdout gets ANSI colors.
    pub fn colorize_stdout(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
                    && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Me-UI showcase browser
///
/// Lists the showcase components, previews them, prints their highlighted
/// source, and copies or exports the original source.
#[derive(Parser, Debug)]
#[command(name = "meui")]
#[command(author, version)]
#[command(about = "Me-UI - copy-paste animated components", long_about = None)]
#[command(styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging for debugging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    /// Log level for diagnostics on stderr
    #[arg(long = "log-level", global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Control color output: auto (default), always, or never
    #[arg(long = "color", global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Path to a config file (default: <config dir>/meui/config.toml)
    #[arg(long = "config", global = true, env = "MEUI_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Highlight theme: showcase, light, or plain
    #[arg(long = "theme", global = true, value_name = "NAME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the effective log level from flags and environment.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.trace {
            LogLevel::Trace
        } else if self.verbose {
            LogLevel::Debug
        } else if let Some(level) = std::env::var("MEUI_LOG_LEVEL")
            .ok()
            .and_then(|v| LogLevel::from_str_loose(&v))
        {
            level
        } else {
            self.log_level
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the showcase components
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Show a component's preview summary or highlighted source
    Show(ShowCommand),

    /// Copy a component's original source to the clipboard
    Copy(CopyCommand),

    /// Write a component's original source to a file
    Export(ExportCommand),

    /// Highlight any JSX file (or stdin)
    Highlight(HighlightCommand),

    /// Generate shell completions
    Completion(CompletionCommand),
}

/// Completion command.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for (default: detected from $SHELL)
    #[arg(value_enum)]
    pub shell: Option<clap_complete::Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::from_str_loose("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose("trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::from_str_loose("loud"), None);
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
    }

    #[test]
    fn test_flags_override_level() {
        let cli = Cli::parse_from(["meui", "--trace", "list"]);
        assert_eq!(cli.effective_log_level(), LogLevel::Trace);

        let cli = Cli::parse_from(["meui", "-v", "list"]);
        assert_eq!(cli.effective_log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_color_mode_explicit() {
        assert!(ColorMode::Always.colorize_stdout());
        assert!(!ColorMode::Never.colorize_stdout());
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["meui", "--color", "never", "show", "BookingBar", "--view", "code"]);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_parse_completion() {
        let cli = Cli::parse_from(["meui", "completion", "zsh"]);
        match cli.command {
            Commands::Completion(cmd) => assert_eq!(cmd.shell, Some(clap_complete::Shell::Zsh)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
