//! CLI styling and formatting.
//!
//! Defines ANSI colors and formatting for the CLI help output.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Help output theme.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Cyan.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section with examples and environment variables.
pub const AFTER_HELP: &str = color_print::cstr!(
    r#"<cyan,bold>EXAMPLES</>
    <green,bold>meui list</>                          Components in sidebar order
    <green,bold>meui show</> <dim>BookingBar</>                Preview summary and import line
    <green,bold>meui show</> <dim>BookingBar --view code</>    Highlighted source with line numbers
    <green,bold>meui copy</> <dim>ThemeToggle</>               Original source to the clipboard
    <green,bold>meui export</> <dim>ProductCard -o card.jsx</> Original source to a file

<cyan,bold>ENVIRONMENT VARIABLES</>
    <yellow>MEUI_CONFIG</>          Config file path (alternative to --config)
    <yellow>MEUI_LOG_LEVEL</>       Log level (error, warn, info, debug, trace)
    <yellow>NO_COLOR</>             Disable colored output"#
);
