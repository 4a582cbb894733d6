//! `hello` - greet someone

use crate::command::{args, Command, Described, Descriptor};
use crate::ui::Presenter;

/// Greets the first positional argument (or "World")
#[derive(Debug, Default)]
pub struct HelloCommand;

impl HelloCommand {
    /// The greeting line for a token list
    pub fn greeting(tokens: &[String]) -> String {
        let keyed = args::parse_keyed(tokens);
        let name = args::first_positional(tokens).unwrap_or("World");
        let greeting = args::option_value(&keyed, "greeting", "Hello");

        let line = format!("{}, {}!", greeting, name);
        if args::has_flag(tokens, "shout") {
            line.to_uppercase()
        } else {
            line
        }
    }
}

impl Described for HelloCommand {
    const DESCRIPTOR: Descriptor = Descriptor::new("hello", "Greet someone by name");
}

impl Command for HelloCommand {
    fn execute(&self, args: &[String], ui: &mut dyn Presenter) -> anyhow::Result<i32> {
        ui.info(&Self::greeting(args));
        Ok(0)
    }

    fn help(&self) -> String {
        "\
Command: hello
Greet someone by name.

Usage:
  console hello [name] [--greeting=<text>] [--shout] [--help]

Options:
  --greeting=<text>  Greeting to use (default: Hello)
  --shout            Print the greeting in upper case
  --help             Show this help

Examples:
  console hello
  console hello Ada --greeting=Welcome
"
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Capture;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_greeting_default() {
        assert_eq!(HelloCommand::greeting(&[]), "Hello, World!");
    }

    #[test]
    fn test_greeting_with_name_and_options() {
        let args = tokens(&["--greeting=Welcome", "Ada", "Bob"]);
        assert_eq!(HelloCommand::greeting(&args), "Welcome, Ada!");
    }

    #[test]
    fn test_greeting_shout() {
        let args = tokens(&["Ada", "--shout"]);
        assert_eq!(HelloCommand::greeting(&args), "HELLO, ADA!");

        let not_a_flag = tokens(&["Ada", "--shout=yes"]);
        assert_eq!(HelloCommand::greeting(&not_a_flag), "Hello, Ada!");
    }

    #[test]
    fn test_execute_writes_through_presenter() {
        let mut ui = Capture::new();
        let code = HelloCommand
            .execute(&tokens(&["Ada", "--greeting=Welcome"]), &mut ui)
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(ui.output(), "Welcome, Ada!");
        assert!(HelloCommand.help().starts_with("Command: hello"));
    }
}
