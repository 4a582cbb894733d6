//! Commands shipped with console-kit
//!
//! This is the built-in tier: registered first, so packages and the
//! project can override any of these names.

pub mod hello;

pub use hello::HelloCommand;

use crate::command::HandlerType;

/// Namespace of the built-in handler types
pub const NAMESPACE: &str = "console_kit::command";

/// The built-in handler types, in registration order
pub fn handlers() -> Vec<HandlerType> {
    vec![HandlerType::of::<HelloCommand>("HelloCommand").qualified(NAMESPACE)]
}
