//! Error types for console-kit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Main error type for console-kit
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The declared startup hook failed while booting
    #[error("Bootstrap '{hook}' failed: {source}")]
    Bootstrap {
        hook: String,
        #[source]
        source: anyhow::Error,
    },

    /// A dispatched handler raised an error instead of returning a code
    #[error("Command '{command}' failed: {source}")]
    Handler {
        command: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Unreadable { path: PathBuf, error: String },
}

/// Discovery problems. These never abort a bootstrap; the affected
/// package or directory is skipped.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("No manifest found in '{0}'")]
    ManifestMissing(PathBuf),

    #[error("Invalid manifest '{path}': {error}")]
    ManifestInvalid { path: PathBuf, error: String },

    #[error("Manifest '{0}' declares no namespace")]
    NoNamespace(PathBuf),

    #[error("Invalid scan pattern: {0}")]
    Pattern(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for discovery operations
pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;

/// Process exit codes produced by the dispatcher itself
pub mod exit {
    /// Success, including informational listings and help output
    pub const SUCCESS: i32 = 0;

    /// The requested command name did not resolve
    pub const UNKNOWN_COMMAND: i32 = 1;
}
