//! console-kit - A tiered command registry and dispatcher
//!
//! Handlers are registered by name from three tiers (built-in, vendor
//! packages, project), resolved from the command line and executed with
//! the remaining tokens. Later tiers override earlier ones by name.

// Public modules
pub mod builtin;
pub mod cli;
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod registry;
pub mod ui;

// Re-export commonly used types
pub use command::{args, Command, Described, Descriptor, HandlerType};
pub use discovery::{Bootstrap, Catalog, Console};
pub use error::{ConsoleError, Result};
pub use registry::{CommandFactory, DefaultFactory, Registry, Resolution};

/// Current version of console-kit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
