//! Discovery and bootstrap
//!
//! [`Console`] assembles a [`Registry`] in three tiers, each able to
//! override the names of the previous ones:
//!
//! 1. built-in handlers shipped with console-kit
//! 2. handlers of vendor packages
//! 3. handlers declared by the project configuration
//!
//! Discovery problems (missing manifests, unreadable directories,
//! unknown identifiers) skip the affected item instead of failing.

pub mod catalog;
pub mod package;
pub mod scan;

pub use catalog::Catalog;
pub use package::{find_packages, Package};
pub use scan::scan_directory;

use crate::builtin;
use crate::command::HandlerType;
use crate::config::{self, Config};
use crate::error::{ConsoleError, Result};
use crate::registry::Registry;
use crate::ui::Presenter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One-time startup hook run before any command is registered
pub trait Bootstrap {
    fn boot(&mut self, root: &Path) -> anyhow::Result<()>;
}

/// Composition root: configuration, tiers and dispatch
pub struct Console {
    root: PathBuf,
    catalog: Catalog,
    builtins: Vec<HandlerType>,
}

impl Console {
    /// Console rooted at the detected project root
    pub fn new(catalog: Catalog) -> Self {
        Self::with_root(config::find_project_root(), catalog)
    }

    /// Console rooted at an explicit directory
    pub fn with_root(root: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Console {
            root: root.into(),
            catalog,
            builtins: builtin::handlers(),
        }
    }

    /// Replace the built-in tier
    pub fn with_builtins(mut self, builtins: Vec<HandlerType>) -> Self {
        self.builtins = builtins;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the configuration and assemble the registry
    pub fn load(&self, ui: &mut dyn Presenter) -> Result<Registry> {
        let (config, config_path) = config::load_config(&self.root)?;
        match &config_path {
            Some(path) => debug!(config = %path.display(), "loaded configuration"),
            None => debug!(
                root = %self.root.display(),
                "no configuration file, using defaults"
            ),
        }
        for problem in config::validate_config(&config) {
            ui.warning(&problem);
        }

        self.run_bootstrap(&config, ui)?;

        let mut registry = self.create_registry(&config, ui);
        self.register_builtins(&mut registry);
        self.register_packages(&mut registry, &config);
        self.register_project(&mut registry, &config);

        info!(commands = registry.len(), "registry assembled");
        Ok(registry)
    }

    /// Assemble the registry and dispatch `argv`
    pub fn run<S: AsRef<str>>(&self, argv: &[S], ui: &mut dyn Presenter) -> Result<i32> {
        let registry = self.load(ui)?;
        registry.run(argv, ui)
    }

    fn run_bootstrap(&self, config: &Config, ui: &mut dyn Presenter) -> Result<()> {
        let Some(id) = &config.bootstrap else {
            return Ok(());
        };

        match self.catalog.bootstrap(id) {
            Some(mut hook) => {
                debug!(bootstrap = %id, "running bootstrap");
                hook.boot(&self.root).map_err(|source| ConsoleError::Bootstrap {
                    hook: id.clone(),
                    source,
                })
            }
            None => {
                ui.warning(&format!("Bootstrap not found: {}", id));
                Ok(())
            }
        }
    }

    fn create_registry(&self, config: &Config, ui: &mut dyn Presenter) -> Registry {
        if let Some(id) = &config.factory {
            match self.catalog.factory(id) {
                Some(factory) => {
                    debug!(factory = %id, "using custom command factory");
                    return Registry::with_factory(&config.name, &config.version, factory);
                }
                None => ui.warning(&format!("Command factory not found: {}", id)),
            }
        }

        Registry::new(&config.name, &config.version)
    }

    fn register_builtins(&self, registry: &mut Registry) {
        for handler in &self.builtins {
            registry.register_from_metadata(handler);
        }
    }

    fn register_packages(&self, registry: &mut Registry, config: &Config) {
        for vendor_dir in &config.packages {
            for package in find_packages(&self.root.join(vendor_dir)) {
                debug!(
                    package = %package.path.display(),
                    namespace = %package.namespace,
                    "registering package"
                );
                self.register_directory(registry, &package.command_dir, &package.namespace);
            }
        }
    }

    fn register_project(&self, registry: &mut Registry, config: &Config) {
        for (namespace, directory) in &config.commands {
            if directory.trim().is_empty() {
                continue;
            }
            let path = self.root.join(directory.trim_start_matches('/'));
            if path.is_dir() {
                self.register_directory(registry, &path, namespace);
            } else {
                debug!(dir = %path.display(), "project command directory not found");
            }
        }
    }

    /// Register every catalogued handler found in `directory`.
    ///
    /// Returns the number of handlers registered.
    pub fn register_directory(
        &self,
        registry: &mut Registry,
        directory: &Path,
        namespace: &str,
    ) -> usize {
        let ids = match scan_directory(directory, namespace) {
            Ok(ids) => ids,
            Err(e) => {
                debug!(dir = %directory.display(), error = %e, "directory not scannable");
                return 0;
            }
        };

        let mut registered = 0;
        for id in ids {
            match self.catalog.handler(&id) {
                Some(handler) => {
                    if registry.register_from_metadata(handler) {
                        registered += 1;
                    }
                }
                None => debug!(handler = %id, "handler file has no catalogued type"),
            }
        }
        registered
    }
}
