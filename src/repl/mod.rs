//! Interactive REPL front end for seculog
//!
//! Built on reedline:
//! - `engine`: editor construction and the per-cycle completion refresh
//! - `completer`: adapter from the completion engine to reedline
//! - `prompt`: the `seculog > ` prompt
//! - `hinter`: inline hints from history
//! - `highlighter`: command-word highlighting
//! - `shared_state`: display settings shared with the executor

pub mod completer;
pub mod engine;
pub mod highlighter;
pub mod hinter;
pub mod prompt;
pub mod shared_state;

pub use completer::ReplCompleter;
pub use engine::{ReplEngine, ReplSignal};
pub use highlighter::CommandHighlighter;
pub use hinter::ReplHinter;
pub use prompt::SeculogPrompt;
pub use shared_state::SharedState;
