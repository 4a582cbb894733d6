//! Configuration parsing and validation
//!
//! This module handles project root detection, loading of the
//! `config/cli.json` file and validation of its contents.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
