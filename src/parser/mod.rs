//! Input parsing for the seculog shells
//!
//! Two layers:
//! - `tokenizer`: POSIX shell-word splitting of a raw line (quotes and
//!   backslash escapes respected)
//! - `command`: resolution of a token sequence into a typed [`Command`],
//!   including subcommand and field-literal validation

pub mod command;
pub mod tokenizer;

pub use command::{Command, ShowKind};
pub use tokenizer::tokenize;
