//! CLI interface
//!
//! This module parses the global options, sets up logging and hands the
//! command line to the console.

pub mod app;

// Re-export main types
pub use app::*;
