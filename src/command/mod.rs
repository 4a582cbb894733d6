//! The command contract and registration metadata
//!
//! Every handler implements [`Command`]. Handler types that want to be
//! picked up by discovery also implement [`Described`], which binds a
//! name and description to the type itself so the registry can file the
//! handler without the handler knowing its own name.

pub mod args;

use crate::ui::Presenter;
use std::fmt;

/// A single executable console command
pub trait Command {
    /// Run the command with the tokens following its name, writing its
    /// output through `ui`.
    ///
    /// Returns the process exit code (0 = success). An `Err` is not
    /// recovered by the dispatcher and ends the process.
    fn execute(&self, args: &[String], ui: &mut dyn Presenter) -> anyhow::Result<i32>;

    /// Static help text shown for `--help`
    fn help(&self) -> String;
}

/// Name and description bound to a handler type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub description: &'static str,
}

impl Descriptor {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Descriptor { name, description }
    }
}

/// Handler types carrying registration metadata
pub trait Described {
    const DESCRIPTOR: Descriptor;
}

/// Default constructor for a handler type
pub type Constructor = fn() -> Box<dyn Command>;

/// A discoverable handler type.
///
/// Either part may be missing: a type without a descriptor or without a
/// constructor is skipped by registration rather than rejected.
#[derive(Clone)]
pub struct HandlerType {
    id: String,
    descriptor: Option<Descriptor>,
    construct: Option<Constructor>,
}

impl HandlerType {
    /// Create a handler type from its parts
    pub fn new(
        id: impl Into<String>,
        descriptor: Option<Descriptor>,
        construct: Option<Constructor>,
    ) -> Self {
        HandlerType {
            id: id.into(),
            descriptor,
            construct,
        }
    }

    /// Handler type for a described, default-constructible command,
    /// identified by `id` (the type name as discovery sees it)
    pub fn of<T>(id: impl Into<String>) -> Self
    where
        T: Command + Described + Default + 'static,
    {
        fn construct<T: Command + Default + 'static>() -> Box<dyn Command> {
            Box::new(T::default())
        }

        HandlerType::new(
            id,
            Some(T::DESCRIPTOR),
            Some(construct::<T> as Constructor),
        )
    }

    /// Type identifier, e.g. `TreeCommand` or `acme::command::TreeCommand`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Last `::` segment of the identifier
    pub fn short_name(&self) -> &str {
        self.id.rsplit("::").next().unwrap_or(&self.id)
    }

    pub fn descriptor(&self) -> Option<Descriptor> {
        self.descriptor
    }

    /// Build an instance with the default constructor, if there is one
    pub fn instantiate(&self) -> Option<Box<dyn Command>> {
        self.construct.map(|construct| construct())
    }

    /// Same type re-filed under a qualified identifier
    pub fn qualified(&self, namespace: &str) -> Self {
        let id = if namespace.is_empty() {
            self.short_name().to_string()
        } else {
            format!("{}::{}", namespace, self.short_name())
        };

        HandlerType { id, ..self.clone() }
    }
}

impl fmt::Debug for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerType")
            .field("id", &self.id)
            .field("descriptor", &self.descriptor)
            .field("constructible", &self.construct.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Capture;

    #[derive(Default)]
    struct TreeCommand;

    impl Described for TreeCommand {
        const DESCRIPTOR: Descriptor = Descriptor::new("fs:tree", "Print a directory tree");
    }

    impl Command for TreeCommand {
        fn execute(&self, _args: &[String], ui: &mut dyn Presenter) -> anyhow::Result<i32> {
            ui.info("walking");
            Ok(7)
        }

        fn help(&self) -> String {
            "tree help".to_string()
        }
    }

    #[test]
    fn test_handler_type_of() {
        let handler = HandlerType::of::<TreeCommand>("TreeCommand");
        assert_eq!(handler.id(), "TreeCommand");
        assert_eq!(
            handler.descriptor(),
            Some(Descriptor::new("fs:tree", "Print a directory tree"))
        );

        let instance = handler.instantiate().unwrap();
        let mut ui = Capture::new();
        assert_eq!(instance.execute(&[], &mut ui).unwrap(), 7);
        assert_eq!(ui.lines(), ["walking"]);
        assert_eq!(instance.help(), "tree help");
    }

    #[test]
    fn test_id_is_taken_as_given() {
        let handler = HandlerType::of::<TreeCommand>("acme::command::Walker");
        assert_eq!(handler.id(), "acme::command::Walker");
        assert_eq!(handler.short_name(), "Walker");
    }

    #[test]
    fn test_qualified_id() {
        let handler = HandlerType::of::<TreeCommand>("TreeCommand").qualified("acme::command");
        assert_eq!(handler.id(), "acme::command::TreeCommand");
        assert_eq!(handler.short_name(), "TreeCommand");

        let requalified = handler.qualified("other");
        assert_eq!(requalified.id(), "other::TreeCommand");
    }

    #[test]
    fn test_handler_without_parts() {
        let handler = HandlerType::new("Abstract", None, None);
        assert!(handler.descriptor().is_none());
        assert!(handler.instantiate().is_none());
    }
}
