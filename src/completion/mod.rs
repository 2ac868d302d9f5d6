//! Contextual command completion for the seculog REPL
//!
//! A recursive, hierarchical autocomplete system that understands the
//! nested command vocabulary, merges in live record identifiers fetched
//! fresh before every prompt cycle, and attaches per-entry descriptions.
//!
//! # Architecture
//!
//! - **node**: the insertion-ordered tree one completion cycle runs over
//! - **engine**: pure recursive descent over `(tree, document)`
//! - **provider**: live identifier-to-label options from the record store
//! - **tree**: the authored vocabulary and its per-cycle lowering
//!
//! A fresh snapshot is lowered from the authored tree before each prompt,
//! so completion always reflects the latest committed records without any
//! cross-cycle invalidation machinery.
//!
//! # Examples
//!
//! ```no_run
//! use seculog::completion::{Document, command_slots, complete, resolve};
//! use seculog::completion::StoreOptionProvider;
//! use seculog::store::RecordStore;
//!
//! let provider = StoreOptionProvider::new(RecordStore::with_path("findings.db"));
//! let tree = resolve(&command_slots(), &provider);
//!
//! // Complete "sh" with the cursor at the end
//! let candidates = complete(&tree, &Document::new("sh", 2));
//! // Yields "show" with its description
//! ```

mod engine;
mod node;
mod provider;
mod tree;

pub use engine::{Candidate, Document, complete};
pub use node::{CompletionNode, Entry, NodeValue};
pub use provider::{DynamicKind, OptionProvider, StoreOptionProvider};
pub use tree::{CommandSlots, SlotValue, command_slots, resolve};
