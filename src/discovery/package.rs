//! Vendor package manifests
//!
//! A package is a directory with a `Cargo.toml` manifest and a
//! `src/command` directory of handler files. The manifest decides the
//! namespace its handlers are filed under.

use crate::error::{DiscoveryError, DiscoveryResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manifest file read from each package
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Handler directory inside a package
pub const COMMAND_DIR: &str = "src/command";

/// Module under the package namespace holding its handlers
pub const COMMAND_MODULE: &str = "command";

/// Package name of console-kit itself, never scanned as a vendor package
pub const SELF_PACKAGE: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<PackageSection>,
    lib: Option<LibSection>,
}

#[derive(Debug, Deserialize)]
struct PackageSection {
    name: Option<String>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    console: Option<ConsoleMetadata>,
}

#[derive(Debug, Deserialize)]
struct ConsoleMetadata {
    namespace: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LibSection {
    name: Option<String>,
}

/// A vendor package holding handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub path: PathBuf,

    /// Namespace the handlers are filed under, e.g. `acme_tools::command`
    pub namespace: String,

    pub command_dir: PathBuf,
}

/// Read the registration namespace declared by a package.
///
/// In priority order: `[package.metadata.console] namespace`, the
/// `[lib] name`, then the package name with `-` replaced by `_`.
pub fn read_namespace(package_dir: &Path) -> DiscoveryResult<String> {
    let manifest_path = package_dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(DiscoveryError::ManifestMissing(package_dir.to_path_buf()));
    }

    let contents = fs::read_to_string(&manifest_path).map_err(|e| DiscoveryError::ManifestInvalid {
        path: manifest_path.clone(),
        error: e.to_string(),
    })?;

    let manifest: Manifest = toml::from_str(&contents).map_err(|e| DiscoveryError::ManifestInvalid {
        path: manifest_path.clone(),
        error: e.to_string(),
    })?;

    let declared = manifest
        .package
        .as_ref()
        .and_then(|p| p.metadata.as_ref())
        .and_then(|m| m.console.as_ref())
        .and_then(|c| c.namespace.clone());
    let lib_name = manifest.lib.and_then(|l| l.name);
    let package_name = manifest
        .package
        .and_then(|p| p.name)
        .map(|name| name.replace('-', "_"));

    declared
        .or(lib_name)
        .or(package_name)
        .map(|ns| ns.trim().trim_end_matches("::").to_string())
        .filter(|ns| !ns.is_empty())
        .ok_or(DiscoveryError::NoNamespace(manifest_path))
}

/// Load one package directory, if it is a usable package
pub fn load_package(package_dir: &Path) -> DiscoveryResult<Package> {
    let command_dir = package_dir.join(COMMAND_DIR);
    let namespace = read_namespace(package_dir)?;

    Ok(Package {
        path: package_dir.to_path_buf(),
        namespace: format!("{}::{}", namespace, COMMAND_MODULE),
        command_dir,
    })
}

/// Packages below a vendor directory, sorted by directory name.
///
/// Directories without a handler directory or a usable manifest are
/// skipped, as is console-kit itself.
pub fn find_packages(vendor_dir: &Path) -> Vec<Package> {
    let entries = match fs::read_dir(vendor_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %vendor_dir.display(), error = %e, "vendor directory not readable");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| path.file_name().map_or(true, |name| name != SELF_PACKAGE))
        .collect();
    dirs.sort();

    dirs.into_iter()
        .filter(|dir| dir.join(COMMAND_DIR).is_dir())
        .filter_map(|dir| match load_package(&dir) {
            Ok(package) => Some(package),
            Err(e) => {
                debug!(package = %dir.display(), error = %e, "skipping package");
                None
            }
        })
        .collect()
}
