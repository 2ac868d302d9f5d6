//! Completion tree nodes
//!
//! A [`CompletionNode`] is one level of the command hierarchy: an
//! insertion-ordered map from command word to either a terminal marker or a
//! nested node, with an optional description per entry.
//!
//! Descriptions for a nested child's own children live on the nested node's
//! entries; the child's self-description is the explicit `description`
//! field on its [`Entry`]. A command word can therefore never collide with
//! description metadata.
//!
//! Nodes are immutable once built for a completion cycle: a fresh snapshot
//! is assembled before every prompt and discarded with it.

use indexmap::IndexMap;

/// Shown for a nested entry that carries no self-description
const NESTED_PLACEHOLDER: &str = "options available";

/// What a command word maps to
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// No further completion beyond this word
    Terminal,

    /// A nested level of completions
    Nested(CompletionNode),
}

/// One child of a completion node
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Terminal marker or nested node
    pub value: NodeValue,

    /// Self-description shown next to the candidate
    pub description: Option<String>,
}

impl Entry {
    /// Flatten the entry's description for display
    ///
    /// A nested entry without its own text falls back to a generic
    /// placeholder; a terminal entry without text shows nothing.
    pub fn display_description(&self) -> Option<String> {
        match (&self.description, &self.value) {
            (Some(text), _) => Some(text.clone()),
            (None, NodeValue::Nested(_)) => Some(NESTED_PLACEHOLDER.to_string()),
            (None, NodeValue::Terminal) => None,
        }
    }
}

/// One level of the command hierarchy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionNode {
    /// Children in insertion order
    entries: IndexMap<String, Entry>,
}

impl CompletionNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a terminal child
    pub fn insert_terminal(&mut self, word: impl Into<String>, description: Option<String>) {
        self.entries.insert(
            word.into(),
            Entry {
                value: NodeValue::Terminal,
                description,
            },
        );
    }

    /// Add a nested child
    pub fn insert_nested(
        &mut self,
        word: impl Into<String>,
        node: CompletionNode,
        description: Option<String>,
    ) {
        self.entries.insert(
            word.into(),
            Entry {
                value: NodeValue::Nested(node),
                description,
            },
        );
    }

    /// Look up a child by exact word
    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    /// Iterate children in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this node has no children
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
