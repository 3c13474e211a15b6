//! Styled status messages on stderr.
//!
//! Messages go to stderr so stdout carries only the requested content
//! (source text, rendered code, JSON). Colors follow the NO_COLOR convention
//! and are dropped when stderr is not a terminal.

use std::io::{IsTerminal, Write};

/// Check if colors should be disabled based on NO_COLOR env var.
fn colors_disabled() -> bool {
    std::env::var("NO_COLOR")
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

fn use_colors() -> bool {
    !colors_disabled() && std::io::stderr().is_terminal()
}

mod palette {
    pub const SUCCESS: &str = "\x1b[38;2;0;245;212m";
    pub const ERROR: &str = "\x1b[38;2;255;107;107m";
    pub const WARNING: &str = "\x1b[38;2;255;200;87m";
    pub const INFO: &str = "\x1b[38;2;72;202;228m";
    pub const DIM: &str = "\x1b[38;2;130;154;177m";
    pub const RESET: &str = "\x1b[0m";
}

/// Message type for styled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Success message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Info message
    Info,
    /// Neutral/dimmed message
    Dim,
}

impl MessageType {
    fn icon(self) -> &'static str {
        match self {
            MessageType::Success => "[OK]",
            MessageType::Error => "[ERROR]",
            MessageType::Warning => "[WARN]",
            MessageType::Info => "[INFO]",
            MessageType::Dim => "-",
        }
    }

    fn color(self) -> &'static str {
        match self {
            MessageType::Success => palette::SUCCESS,
            MessageType::Error => palette::ERROR,
            MessageType::Warning => palette::WARNING,
            MessageType::Info => palette::INFO,
            MessageType::Dim => palette::DIM,
        }
    }
}

/// Format a message with its icon, colored when `colored` is set.
pub fn format_message(msg_type: MessageType, message: &str, colored: bool) -> String {
    if colored {
        format!("{}{} {}{}", msg_type.color(), msg_type.icon(), message, palette::RESET)
    } else {
        format!("{} {}", msg_type.icon(), message)
    }
}

fn print_styled(msg_type: MessageType, message: &str) {
    let line = format_message(msg_type, message, use_colors());
    let _ = writeln!(std::io::stderr(), "{}", line);
}

/// Print a success message to stderr.
pub fn print_success(message: &str) {
    print_styled(MessageType::Success, message);
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    print_styled(MessageType::Error, message);
}

/// Print a warning message to stderr.
pub fn print_warning(message: &str) {
    print_styled(MessageType::Warning, message);
}

/// Print an info message to stderr.
pub fn print_info(message: &str) {
    print_styled(MessageType::Info, message);
}

/// Print a dimmed message to stderr.
pub fn print_dim(message: &str) {
    print_styled(MessageType::Dim, message);
}
