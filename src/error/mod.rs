//! Error handling module for seculog.
//!
//! Provides the crate-wide error taxonomy:
//! - `ParseError` for malformed input lines (unterminated quoting)
//! - `DispatchError` for unknown commands, bad subcommands, and bad arguments
//! - `StoreError` for record-store failures
//! - `ConfigError` for configuration problems
//!
//! Every kind here is recoverable: the REPL renders the message and
//! re-prompts. Nothing in this taxonomy terminates the process.

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, DispatchError, ParseError, Result, SeculogError, StoreError};
