//! Command execution engine
//!
//! Executes resolved [`Command`](crate::parser::Command)s against the
//! record store:
//! - `context`: the session context owning the store handle and display
//!   state, passed explicitly to whoever needs it
//! - `router`: maps each command to its handler
//! - `records`: mutation handlers (add, update, delete)
//! - `reports`: listing and help handlers
//! - `result`: the data returned to the formatter

pub mod context;
pub mod records;
pub mod reports;
pub mod result;
pub mod router;

pub use context::ExecutionContext;
pub use result::{ExecutionResult, HelpEntry, ResultData};
pub use router::CommandRouter;
