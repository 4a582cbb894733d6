//! Command registry and dispatcher
//!
//! The registry maps command names to handler instances. Registration is
//! last-write-wins: registering a name again replaces the previous entry,
//! which is how later discovery tiers override earlier ones.

pub mod listing;

pub use listing::{build_rows, group_of, listing_table, CommandRow, MISC_GROUP};

use crate::command::{args, Command, HandlerType};
use crate::error::{exit, ConsoleError, Result};
use crate::ui::Presenter;
use std::collections::HashMap;
use tracing::{debug, info};

/// Default application name shown in titles
pub const DEFAULT_NAME: &str = "Console";

/// Default application version shown in titles
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Strategy used to build handler instances during discovery
pub trait CommandFactory {
    /// Build an instance of the handler type, `None` if it cannot be built
    fn make(&self, handler: &HandlerType) -> Option<Box<dyn Command>>;
}

/// Factory using each type's default constructor
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl CommandFactory for DefaultFactory {
    fn make(&self, handler: &HandlerType) -> Option<Box<dyn Command>> {
        handler.instantiate()
    }
}

/// A registered command
pub struct Entry {
    pub name: String,
    pub description: String,
    pub handler: Box<dyn Command>,
}

/// Outcome of resolving a command line against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No command name given
    Empty,

    /// The name is registered
    Exact(String),

    /// The name is a group prefix of these registered names (sorted)
    GroupPrefix(Vec<String>),

    /// Nothing matches the name
    NotFound(String),
}

/// Registry of named command handlers
pub struct Registry {
    name: String,
    version: String,
    factory: Box<dyn CommandFactory>,
    commands: HashMap<String, Entry>,
}

impl Registry {
    /// Create an empty registry using the default factory
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::with_factory(name, version, Box::new(DefaultFactory))
    }

    /// Create an empty registry building handlers through `factory`
    pub fn with_factory(
        name: impl Into<String>,
        version: impl Into<String>,
        factory: Box<dyn CommandFactory>,
    ) -> Self {
        Registry {
            name: name.into(),
            version: version.into(),
            factory,
            commands: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Register a handler under `name`, replacing any previous entry.
    ///
    /// Returns the replaced entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Box<dyn Command>,
        description: impl Into<String>,
    ) -> Option<Entry> {
        let name = name.into();
        let entry = Entry {
            name: name.clone(),
            description: description.into(),
            handler,
        };

        let previous = self.commands.insert(name, entry);
        if let Some(previous) = &previous {
            info!(
                command = %previous.name,
                replaced = %previous.description,
                "overriding previously registered command"
            );
        }
        previous
    }

    /// Register a handler type through its descriptor.
    ///
    /// Silently skips types without a descriptor and types the factory
    /// cannot build. Returns true if something was registered.
    pub fn register_from_metadata(&mut self, handler: &HandlerType) -> bool {
        let Some(descriptor) = handler.descriptor() else {
            debug!(handler = handler.id(), "skipping handler without descriptor");
            return false;
        };

        let Some(instance) = self.factory.make(handler) else {
            debug!(handler = handler.id(), "skipping handler that cannot be instantiated");
            return false;
        };

        debug!(command = descriptor.name, handler = handler.id(), "registering command");
        self.register(descriptor.name, instance, descriptor.description);
        true
    }

    /// Resolve a command line. `argv[0]` is the program name and
    /// `argv[1]` the command name.
    pub fn resolve<S: AsRef<str>>(&self, argv: &[S]) -> Resolution {
        let command_name = match argv.get(1).map(|s| s.as_ref()) {
            Some(name) if !name.is_empty() => name,
            _ => return Resolution::Empty,
        };

        if self.commands.contains_key(command_name) {
            return Resolution::Exact(command_name.to_string());
        }

        let prefix = format!("{}:", command_name);
        let matches: Vec<String> = self
            .names()
            .into_iter()
            .filter(|name| name.starts_with(&prefix))
            .map(str::to_string)
            .collect();

        if matches.is_empty() {
            Resolution::NotFound(command_name.to_string())
        } else {
            Resolution::GroupPrefix(matches)
        }
    }

    /// Listing rows for all commands, or only for the named ones
    pub fn rows(&self, only: Option<&[String]>) -> Vec<CommandRow> {
        let entries = self
            .commands
            .values()
            .filter(|entry| only.map_or(true, |names| names.contains(&entry.name)))
            .map(|entry| (entry.name.as_str(), entry.description.as_str()));

        build_rows(entries)
    }

    /// Resolve and dispatch a command line, returning the exit code
    pub fn run<S: AsRef<str>>(&self, argv: &[S], ui: &mut dyn Presenter) -> Result<i32> {
        match self.resolve(argv) {
            Resolution::Empty => {
                self.display_title(ui);
                self.display_listing(ui, None);
                Ok(exit::SUCCESS)
            }
            Resolution::Exact(name) => {
                let entry = &self.commands[&name];
                let tokens: Vec<String> = argv
                    .iter()
                    .skip(2)
                    .map(|t| t.as_ref().to_string())
                    .collect();

                if args::wants_help(&tokens) {
                    ui.info(&entry.handler.help());
                    return Ok(exit::SUCCESS);
                }

                debug!(command = %name, args = ?tokens, "dispatching command");
                entry
                    .handler
                    .execute(&tokens, ui)
                    .map_err(|source| ConsoleError::Handler {
                        command: name,
                        source,
                    })
            }
            Resolution::GroupPrefix(matches) => {
                self.display_title(ui);
                self.display_listing(ui, Some(matches.as_slice()));
                Ok(exit::SUCCESS)
            }
            Resolution::NotFound(name) => {
                self.display_title(ui);
                ui.error(&format!("Unknown command: \"{}\"", name));
                ui.new_line();
                self.display_listing(ui, None);
                Ok(exit::UNKNOWN_COMMAND)
            }
        }
    }

    fn display_title(&self, ui: &mut dyn Presenter) {
        ui.title(&format!("{} v{}", self.name, self.version));
    }

    fn display_listing(&self, ui: &mut dyn Presenter, only: Option<&[String]>) {
        let rows = self.rows(only);
        if rows.is_empty() {
            ui.warning("No commands registered.");
            return;
        }

        ui.subtitle("Available commands:");
        ui.new_line();
        ui.render_table(&listing_table(&rows));
        ui.new_line();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_VERSION)
    }
}
