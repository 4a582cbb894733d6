//! Directory scanning for handler files

use crate::error::{DiscoveryError, DiscoveryResult};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// File stem suffix marking a handler implementation
pub const HANDLER_SUFFIX: &str = "_command";

/// Handler files in `directory`, sorted by path
pub fn handler_files(directory: &Path) -> DiscoveryResult<Vec<PathBuf>> {
    let escaped = Pattern::escape(&directory.to_string_lossy());
    let pattern = format!("{}/*{}.rs", escaped.trim_end_matches('/'), HANDLER_SUFFIX);

    let entries = glob(&pattern).map_err(|e| DiscoveryError::Pattern(e.to_string()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    Ok(files)
}

/// Type name a handler file declares: `tree_command.rs` -> `TreeCommand`
pub fn type_name_from_file(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if !stem.ends_with(HANDLER_SUFFIX) || stem.len() == HANDLER_SUFFIX.len() {
        return None;
    }

    let name: String = stem
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();

    Some(name)
}

/// Qualified type identifiers for the handler files in `directory`
pub fn scan_directory(directory: &Path, namespace: &str) -> DiscoveryResult<Vec<String>> {
    Ok(handler_files(directory)?
        .iter()
        .filter_map(|path| type_name_from_file(path))
        .map(|name| format!("{}::{}", namespace, name))
        .collect())
}
