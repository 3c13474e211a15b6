//! Command dispatch and execution handlers.
//!
//! This module provides the dispatch function that routes CLI commands
//! to their respective handlers.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use meui_syntax::Theme;
use std::io::{self, Write};

use super::args::{Cli, ColorMode, Commands, CompletionCommand};
use crate::config::Config;
use crate::styled_output::print_warning;

/// Settings shared by every command, resolved once from flags and config.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Theme used for colored output.
    pub theme: Theme,
    /// Draw the line-number gutter in code views.
    pub line_numbers: bool,
    /// Color mode requested on the command line.
    pub color: ColorMode,
}

impl CommandContext {
    /// Builds the context from parsed flags, loading the config file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        Self::from_config(&config, cli.theme.as_deref(), cli.color)
    }

    /// Builds the context from an already loaded config.
    pub fn from_config(config: &Config, theme: Option<&str>, color: ColorMode) -> Result<Self> {
        let theme = config.resolve_theme(theme)?;
        tracing::debug!(theme = theme.name(), ?color, "resolved command context");
        Ok(Self {
            theme,
            line_numbers: config.line_numbers(),
            color,
        })
    }

    /// Whether stdout gets ANSI colors.
    pub fn colorize(&self) -> bool {
        self.color.colorize_stdout()
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            theme: Theme::showcase(),
            line_numbers: true,
            color: ColorMode::Auto,
        }
    }
}

/// Dispatch a CLI command to its handler.
///
/// This is the main command router for the CLI.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    if let Commands::Completion(completion_cli) = &cli.command {
        handle_completion(completion_cli);
        return Ok(());
    }

    let ctx = CommandContext::from_cli(&cli)?;
    match cli.command {
        Commands::List(list_cli) => list_cli.run(&ctx),
        Commands::Show(show_cli) => show_cli.run(&ctx),
        Commands::Copy(copy_cli) => copy_cli.run(&ctx),
        Commands::Export(export_cli) => export_cli.run(&ctx),
        Commands::Highlight(highlight_cli) => highlight_cli.run(&ctx),
        // Handled before config loading.
        Commands::Completion(_) => Ok(()),
    }
}

/// Handle completion command.
fn handle_completion(completion_cli: &CompletionCommand) {
    let shell = completion_cli.shell.unwrap_or_else(detect_shell_from_env);
    generate_completions(shell);
}

/// Detect the user's shell from $SHELL, falling back to bash.
fn detect_shell_from_env() -> Shell {
    let shell_name = std::env::var("SHELL")
        .ok()
        .and_then(|path| {
            std::path::Path::new(&path)
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_lowercase)
        })
        .unwrap_or_default();

    match shell_name.as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" | "pwsh" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            print_warning(&format!(
                "Unknown shell '{}' from $SHELL. Defaulting to bash.",
                shell_name
            ));
            Shell::Bash
        }
    }
}

/// Generate shell completions to stdout.
fn generate_completions(shell: Shell) {
    /// Custom writer that silently ignores BrokenPipe errors.
    struct BrokenPipeIgnorer<W: Write> {
        inner: W,
    }

    impl<W: Write> Write for BrokenPipeIgnorer<W> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            match self.inner.write(buf) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(buf.len()),
                other => other,
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            match self.inner.flush() {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        }
    }

    let mut cmd = Cli::command();
    let mut out = BrokenPipeIgnorer {
        inner: io::stdout(),
    };
    generate(shell, &mut cmd, "meui", &mut out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = CommandContext::from_config(&Config::default(), None, ColorMode::Never).unwrap();
        assert_eq!(ctx.theme.name(), "showcase");
        assert!(ctx.line_numbers);
        assert!(!ctx.colorize());
    }

    #[test]
    fn test_context_unknown_theme() {
        let err = CommandContext::from_config(&Config::default(), Some("neon"), ColorMode::Auto)
            .unwrap_err();
        assert!(err.to_string().contains("neon"));
    }
}
