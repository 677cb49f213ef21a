//! Shared types for the weight tracking bot
//!
//! Contains the identifiers and transport-neutral message shapes used by both
//! the analytics engine and the bot, plus common error and logging helpers.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
