//! Core configuration types
//!
//! This module defines the data structures that represent a project's
//! `config/cli.json` (or `cli.yaml`) file.

use crate::registry::{DEFAULT_NAME, DEFAULT_VERSION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vendor directory scanned for packages when the config names none
pub const DEFAULT_PACKAGE_DIR: &str = "vendor/console";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Display name shown in titles
    #[serde(default = "default_name")]
    pub name: String,

    /// Display version shown in titles
    #[serde(default = "default_version")]
    pub version: String,

    /// Startup hook identifier, run before any registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap: Option<String>,

    /// Factory identifier used to build every handler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<String>,

    /// Project commands: namespace -> directory (relative to the root)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, String>,

    /// Vendor directories holding command packages (relative to the root)
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_packages() -> Vec<String> {
    vec![DEFAULT_PACKAGE_DIR.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: default_name(),
            version: default_version(),
            bootstrap: None,
            factory: None,
            commands: BTreeMap::new(),
            packages: default_packages(),
        }
    }
}
