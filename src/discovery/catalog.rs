//! Static catalog of discoverable types
//!
//! Rust cannot load a handler from a source file at runtime, so hosts
//! declare every handler type they link in. A directory scan then only
//! decides *which* of the catalogued types get registered.

use crate::command::{Command, Described, HandlerType};
use crate::discovery::Bootstrap;
use crate::registry::CommandFactory;
use std::collections::BTreeMap;

/// Builds a startup hook
pub type BootstrapConstructor = fn() -> Box<dyn Bootstrap>;

/// Builds a command factory
pub type FactoryConstructor = fn() -> Box<dyn CommandFactory>;

/// Handler types, startup hooks and factories known to the host
#[derive(Default)]
pub struct Catalog {
    handlers: BTreeMap<String, HandlerType>,
    bootstraps: BTreeMap<String, BootstrapConstructor>,
    factories: BTreeMap<String, FactoryConstructor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a handler type under `<namespace>::<TypeName>`
    pub fn add(&mut self, namespace: &str, handler: HandlerType) -> &mut Self {
        let handler = handler.qualified(namespace);
        self.handlers.insert(handler.id().to_string(), handler);
        self
    }

    /// File a described command type under its qualified id, e.g.
    /// `acme::command::TreeCommand`
    pub fn with<T>(mut self, id: &str) -> Self
    where
        T: Command + Described + Default + 'static,
    {
        self.handlers.insert(id.to_string(), HandlerType::of::<T>(id));
        self
    }

    /// Make a startup hook available under `id`
    pub fn with_bootstrap(
        mut self,
        id: impl Into<String>,
        construct: BootstrapConstructor,
    ) -> Self {
        self.bootstraps.insert(id.into(), construct);
        self
    }

    /// Make a factory available under `id`
    pub fn with_factory(mut self, id: impl Into<String>, construct: FactoryConstructor) -> Self {
        self.factories.insert(id.into(), construct);
        self
    }

    pub fn handler(&self, id: &str) -> Option<&HandlerType> {
        self.handlers.get(id)
    }

    pub fn bootstrap(&self, id: &str) -> Option<Box<dyn Bootstrap>> {
        self.bootstraps.get(id).map(|construct| construct())
    }

    pub fn factory(&self, id: &str) -> Option<Box<dyn CommandFactory>> {
        self.factories.get(id).map(|construct| construct())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Descriptor;
    use crate::registry::DefaultFactory;
    use crate::ui::Presenter;
    use std::path::Path;

    #[derive(Default)]
    struct TreeCommand;

    impl Described for TreeCommand {
        const DESCRIPTOR: Descriptor = Descriptor::new("fs:tree", "Tree");
    }

    impl Command for TreeCommand {
        fn execute(&self, _args: &[String], _ui: &mut dyn Presenter) -> anyhow::Result<i32> {
            Ok(0)
        }

        fn help(&self) -> String {
            String::new()
        }
    }

    struct Noop;

    impl Bootstrap for Noop {
        fn boot(&mut self, _root: &Path) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new()
            .with::<TreeCommand>("acme::command::TreeCommand")
            .with_bootstrap("acme::Boot", || Box::new(Noop))
            .with_factory("acme::Factory", || Box::new(DefaultFactory));

        assert_eq!(catalog.len(), 1);
        assert!(catalog.handler("acme::command::TreeCommand").is_some());
        assert!(catalog.handler("TreeCommand").is_none());
        assert!(catalog.bootstrap("acme::Boot").is_some());
        assert!(catalog.bootstrap("acme::Missing").is_none());
        assert!(catalog.factory("acme::Factory").is_some());
    }

    #[test]
    fn test_same_type_in_two_namespaces() {
        let mut catalog = Catalog::new();
        catalog
            .add("one", HandlerType::of::<TreeCommand>("TreeCommand"))
            .add("two", HandlerType::of::<TreeCommand>("TreeCommand"));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.handler("one::TreeCommand").is_some());
        assert!(catalog.handler("two::TreeCommand").is_some());
    }

    #[test]
    fn test_with_files_under_the_given_id() {
        let catalog = Catalog::new().with::<TreeCommand>("acme::command::Walker");

        let handler = catalog.handler("acme::command::Walker").unwrap();
        assert_eq!(handler.short_name(), "Walker");
        assert!(catalog.handler("acme::command::TreeCommand").is_none());
    }
}
