//! Me-UI CLI library module.
//!
//! This module provides the showcase browser behind the `meui` binary:
//! - Component listing (the sidebar)
//! - Preview and code views of one component
//! - Copy to clipboard and export of the original source
//! - Highlighting of arbitrary JSX files
//!
//! # Module Organization
//!
//! - `cli/` - CLI argument parsing and command dispatch
//! - Command modules - Individual CLI commands (`*_cmd.rs`)
//! - `config` - TOML configuration
//! - `output` - Code rendering to stdout
//! - `styled_output` - Status messages on stderr
//! - `clipboard` - System clipboard access

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod output;
pub mod styled_output;

pub mod copy_cmd;
pub mod export_cmd;
pub mod highlight_cmd;
pub mod list_cmd;
pub mod show_cmd;

pub use cli::handlers::CommandContext;
pub use config::{Config, ConfigError};
