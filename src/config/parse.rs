//! Project root detection and configuration loading

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File marking a project root
pub const PROJECT_MARKER: &str = "Cargo.toml";

/// Configuration file locations relative to the project root, in priority order
const CONFIG_FILE_NAMES: &[&str] = &["config/cli.json", "config/cli.yaml", "config/cli.yml"];

/// Find the project root by searching current and parent directories,
/// falling back to the current directory
pub fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_project_root_from(&cwd).unwrap_or(cwd)
}

/// Nearest directory at or above `start_dir` containing the project marker
pub fn find_project_root_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = Some(start_dir);

    while let Some(dir) = current_dir {
        if dir.join(PROJECT_MARKER).is_file() {
            return Some(dir.to_path_buf());
        }
        current_dir = dir.parent();
    }

    None
}

/// Path of the configuration file under `root`, if one exists
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file, choosing the format by extension
pub fn parse_config_file(path: &Path) -> ConfigResult<Config> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Format::Yaml,
        _ => Format::Json,
    };

    parse_config(&contents, format).map_err(|error| ConfigError::Unreadable {
        path: path.to_path_buf(),
        error,
    })
}

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

/// Parse configuration from a string
pub fn parse_config(contents: &str, format: Format) -> Result<Config, String> {
    match format {
        Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        Format::Yaml => {
            // An empty YAML document means "no settings"
            if contents.trim().is_empty() {
                return Ok(Config::default());
            }
            serde_yaml::from_str(contents).map_err(|e| e.to_string())
        }
    }
}

/// Load the configuration under `root`.
///
/// A missing file is not an error: defaults apply. A file that exists but
/// cannot be read or parsed is.
pub fn load_config(root: &Path) -> ConfigResult<(Config, Option<PathBuf>)> {
    match find_config_file(root) {
        Some(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}
