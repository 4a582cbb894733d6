//! Recording presenter

use crate::ui::{render_lines, Presenter, RenderConfig, Table};
use std::collections::VecDeque;

/// Presenter that records everything as plain text lines.
///
/// Prompts are answered from a queue of canned answers, falling back to
/// the prompt's default once the queue is empty.
#[derive(Debug, Default)]
pub struct Capture {
    lines: Vec<String>,
    answers: VecDeque<String>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for `ask` and `confirm`
    pub fn with_answers<S: Into<String>>(mut self, answers: impl IntoIterator<Item = S>) -> Self {
        self.answers.extend(answers.into_iter().map(Into::into));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Everything recorded, newline separated
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl Presenter for Capture {
    fn title(&mut self, text: &str) {
        self.push(text.to_string());
    }

    fn subtitle(&mut self, text: &str) {
        self.push(text.to_string());
    }

    fn success(&mut self, text: &str) {
        self.push(format!("[OK] {}", text));
    }

    fn error(&mut self, text: &str) {
        self.push(format!("[ERROR] {}", text));
    }

    fn warning(&mut self, text: &str) {
        self.push(format!("[WARN] {}", text));
    }

    fn info(&mut self, text: &str) {
        self.push(text.to_string());
    }

    fn new_line(&mut self) {
        self.push(String::new());
    }

    fn render_table(&mut self, table: &Table) {
        self.lines.extend(render_lines(table, &RenderConfig::plain()));
    }

    fn ask(&mut self, prompt: &str, default: &str) -> String {
        self.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) if !answer.is_empty() => answer,
            _ => default.to_string(),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> bool {
        self.push(prompt.to_string());
        self.answers
            .pop_front()
            .and_then(|answer| crate::ui::parse_confirmation(&answer))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_messages() {
        let mut capture = Capture::new();
        capture.title("Console v1.0.0");
        capture.error("boom");
        capture.warning("careful");

        assert_eq!(capture.lines(), ["Console v1.0.0", "[ERROR] boom", "[WARN] careful"]);
        assert!(capture.contains("boom"));
    }

    #[test]
    fn test_capture_answers() {
        let mut capture = Capture::new().with_answers(["Ada", "", "no"]);
        assert_eq!(capture.ask("Name?", "User"), "Ada");
        assert_eq!(capture.ask("Name?", "User"), "User");
        assert!(!capture.confirm("Sure?", true));
        assert!(capture.confirm("Sure?", true));
    }
}
