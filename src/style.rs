//! Terminal styling utilities
//!
//! Provides a consistent color scheme for CLI output.
//! Uses crossterm for cross-platform terminal colors.

use crossterm::style::{StyledContent, Stylize};

/// Fatal startup diagnostic, prefixed with the stop glyph.
///
/// Blank lines around the message keep it visible when the command was run
/// from a wrapper script with interleaved output.
pub fn fatal(text: &str) -> StyledContent<String> {
    format!("\n🛑 {}\n", text).red().bold()
}

/// Success text
pub fn success(text: &str) -> StyledContent<String> {
    text.to_string().green()
}

/// Section headers
pub fn header(text: &str) -> StyledContent<String> {
    text.to_string().bold()
}

/// Dim/muted text
pub fn dim(text: &str) -> StyledContent<String> {
    text.to_string().dark_grey()
}

/// Path styling
pub fn path(p: &str) -> StyledContent<String> {
    p.to_string().blue()
}

/// Highlight important text (yellow)
pub fn highlight(text: &str) -> StyledContent<String> {
    text.to_string().yellow()
}

/// Stage name colors
/// - prod: Red (deployments here are for keeps)
/// - dev: Green
/// - anything else: Cyan
pub fn stage_style(stage: &str) -> StyledContent<String> {
    // Callers may pass a column-padded name
    match stage.trim_end() {
        "prod" => stage.to_string().red().bold(),
        "dev" => stage.to_string().green(),
        _ => stage.to_string().cyan(),
    }
}
