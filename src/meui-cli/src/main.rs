//! Me-UI CLI - Main entry point.
//!
//! Browses the showcase components from the terminal:
//! - `list` - the component sidebar
//! - `show` - preview summary or highlighted code
//! - `copy` / `export` - the original source, verbatim
//! - `highlight` - any JSX file or stdin
//!
//! # Architecture
//!
//! - `cli/` - Command-line argument parsing and dispatch
//! - `*_cmd.rs` - Individual command implementations

use clap::Parser;
use std::process::ExitCode;

use meui_cli::cli::{Cli, ColorMode, dispatch_command};
use meui_cli::styled_output::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle color mode
    // SAFETY: Environment variable mutations happen early before threads spawn
    match cli.color {
        ColorMode::Never => unsafe { std::env::set_var("NO_COLOR", "1") },
        ColorMode::Always => unsafe { std::env::remove_var("NO_COLOR") },
        ColorMode::Auto => {}
    }

    let log_level = cli.effective_log_level();
    let filter_str = if std::env::var("RUST_LOG").is_ok() {
        format!(
            "error,meui={},meui_cli={},meui_syntax={},meui_catalog={}",
            log_level.as_filter_str(),
            log_level.as_filter_str(),
            log_level.as_filter_str(),
            log_level.as_filter_str()
        )
    } else {
        log_level.as_filter_str().to_string()
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(&filter_str)
        .init();

    match dispatch_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
