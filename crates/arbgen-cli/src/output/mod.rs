//! Output formatting for CLI commands.

pub mod diagnostic;
pub mod table;

use owo_colors::{OwoColorize, Stream, Style};

pub use diagnostic::generate_report;

/// Stdout label in the given style, when colors are enabled.
pub fn label(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

pub fn success(text: &str) -> String {
    label(text, Style::new().green().bold())
}

pub fn caution(text: &str) -> String {
    label(text, Style::new().yellow().bold())
}
