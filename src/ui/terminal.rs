//! ANSI terminal presenter

use crate::ui::{parse_confirmation, render_lines, Presenter, RenderConfig, Table};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Presenter writing to stdout (messages) and stderr (errors, warnings)
pub struct Terminal {
    config: RenderConfig,
}

impl Terminal {
    pub fn new(config: RenderConfig) -> Self {
        Terminal { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn paint(&self, text: &str, paint: impl FnOnce(&str) -> colored::ColoredString) -> String {
        let text = self.config.display(text);
        if self.config.color {
            paint(&text).to_string()
        } else {
            text
        }
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{}", prompt);
        let _ = stdout.flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(answer.trim().to_string()),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(RenderConfig::detect())
    }
}

impl Presenter for Terminal {
    fn title(&mut self, text: &str) {
        println!();
        println!("{}", self.paint(text, |t| t.magenta().bold()));
        println!("{}", self.paint(&"=".repeat(text.chars().count()), |t| t.magenta()));
    }

    fn subtitle(&mut self, text: &str) {
        println!("{}", self.paint(text, |t| t.cyan().bold()));
    }

    fn success(&mut self, text: &str) {
        println!("{}", self.paint(&format!("[OK] {}", text), |t| t.green()));
    }

    fn error(&mut self, text: &str) {
        eprintln!("{}", self.paint(&format!("[ERROR] {}", text), |t| t.red().bold()));
    }

    fn warning(&mut self, text: &str) {
        eprintln!("{}", self.paint(&format!("[WARN] {}", text), |t| t.yellow()));
    }

    fn info(&mut self, text: &str) {
        println!("{}", self.paint(text, |t| t.normal()));
    }

    fn new_line(&mut self) {
        println!();
    }

    fn render_table(&mut self, table: &Table) {
        for line in render_lines(table, &self.config) {
            println!("{}", line);
        }
    }

    fn ask(&mut self, prompt: &str, default: &str) -> String {
        let question = self.paint(&format!("{} [{}] ", prompt, default), |t| t.cyan());
        match self.read_line(&question) {
            Some(answer) if !answer.is_empty() => answer,
            _ => default.to_string(),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> bool {
        let hint = if default { "Y/n" } else { "y/N" };
        let question = self.paint(&format!("{} [{}] ", prompt, hint), |t| t.cyan());
        self.read_line(&question)
            .and_then(|answer| parse_confirmation(&answer))
            .unwrap_or(default)
    }
}
