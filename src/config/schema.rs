//! Configuration validation
//!
//! Problems found here never abort loading. Each one is reported as a
//! message and the affected entry is skipped by discovery.

use crate::config::types::Config;

/// Collect the problems of a complete configuration
pub fn validate_config(config: &Config) -> Vec<String> {
    let mut problems = Vec::new();

    for (namespace, directory) in &config.commands {
        if directory.trim().is_empty() {
            problems.push(format!(
                "Command directory for namespace '{}' is empty, skipped",
                namespace
            ));
        } else if !is_namespace(namespace) {
            problems.push(format!(
                "Command namespace '{}' is not a '::'-separated path, no handlers will match",
                namespace
            ));
        }
    }

    problems
}

/// A namespace is a non-empty `::`-separated path of identifiers
pub fn is_namespace(namespace: &str) -> bool {
    namespace.split("::").all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
