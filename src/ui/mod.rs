//! Terminal presentation
//!
//! The dispatcher talks to a [`Presenter`] and never writes to the
//! terminal directly. [`Terminal`] renders with ANSI colours;
//! [`Capture`] records plain lines.

pub mod capture;
pub mod table;
pub mod terminal;

pub use capture::Capture;
pub use table::{render_lines, Table, TableStyle};
pub use terminal::Terminal;

use std::env;

/// Rendering settings threaded through presentation calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit ANSI colour codes
    pub color: bool,

    /// Terminal handles UTF-8; otherwise non-ASCII renders as `?`
    pub unicode: bool,
}

impl RenderConfig {
    /// Settings derived from the process environment
    pub fn detect() -> Self {
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.is_empty())
            .unwrap_or_default();

        RenderConfig {
            color: env::var_os("NO_COLOR").is_none(),
            unicode: is_utf8_locale(&locale),
        }
    }

    /// Plain output: no colour, full unicode
    pub fn plain() -> Self {
        RenderConfig {
            color: false,
            unicode: true,
        }
    }

    /// Text as it will be displayed
    pub fn display(&self, text: &str) -> String {
        if self.unicode {
            text.to_string()
        } else {
            text.chars()
                .map(|c| if c.is_ascii() { c } else { '?' })
                .collect()
        }
    }

    /// Display width of already-converted text
    pub fn width(&self, text: &str) -> usize {
        text.chars().count()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::detect()
    }
}

fn is_utf8_locale(locale: &str) -> bool {
    let upper = locale.to_uppercase();
    upper.contains("UTF-8") || upper.contains("UTF8")
}

/// Output collaborator used by the dispatcher and by handlers
pub trait Presenter {
    fn title(&mut self, text: &str);
    fn subtitle(&mut self, text: &str);
    fn success(&mut self, text: &str);
    fn error(&mut self, text: &str);
    fn warning(&mut self, text: &str);
    fn info(&mut self, text: &str);
    fn new_line(&mut self);
    fn render_table(&mut self, table: &Table);

    /// Prompt for a line of input, returning `default` on empty input
    fn ask(&mut self, prompt: &str, default: &str) -> String;

    /// Prompt for a yes/no answer
    fn confirm(&mut self, prompt: &str, default: bool) -> bool;
}

/// Interpret a yes/no answer, `None` when unrecognised
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
