//! Completer for reedline - provides completion suggestions

use std::sync::{Arc, RwLock};

use reedline::{Completer, Span, Suggestion};

use crate::completion::{CompletionNode, Document, complete};

/// Seculog completer for reedline
///
/// Holds the per-cycle tree snapshot behind a shared handle; the REPL
/// engine swaps in a fresh snapshot before every prompt, and reedline
/// re-invokes `complete` on every keystroke against it.
pub struct ReplCompleter {
    /// Tree snapshot for the current prompt cycle
    snapshot: Arc<RwLock<CompletionNode>>,
}

impl ReplCompleter {
    /// Create a new completer reading from the given snapshot handle
    ///
    /// # Arguments
    /// * `snapshot` - Shared tree snapshot, refreshed per prompt cycle
    ///
    /// # Returns
    /// * `Self` - New completer
    pub fn new(snapshot: Arc<RwLock<CompletionNode>>) -> Self {
        Self { snapshot }
    }
}

impl Completer for ReplCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let tree = self.snapshot.read().unwrap();
        let document = Document::new(line, pos);

        // Convert to reedline Suggestions; replace_from is a negative
        // offset from the cursor into the word being replaced
        complete(&tree, &document)
            .into_iter()
            .map(|candidate| {
                let start = pos.saturating_sub(candidate.replace_from.unsigned_abs());
                Suggestion {
                    value: candidate.text,
                    description: candidate.description,
                    style: None,
                    extra: None,
                    span: Span::new(start, pos),
                    append_whitespace: false,
                    match_indices: None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::NodeValue;

    fn snapshot() -> Arc<RwLock<CompletionNode>> {
        let mut show = CompletionNode::new();
        show.insert_terminal("targets", None);
        show.insert_terminal("vulns", None);

        let mut root = CompletionNode::new();
        root.insert_nested("show", show, Some("Show stored records".to_string()));
        root.insert_terminal("exit", None);
        Arc::new(RwLock::new(root))
    }

    #[test]
    fn test_span_covers_typed_word() {
        let mut completer = ReplCompleter::new(snapshot());
        let suggestions = completer.complete("sh", 2);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "show");
        assert_eq!(suggestions[0].span.start, 0);
        assert_eq!(suggestions[0].span.end, 2);
    }

    #[test]
    fn test_span_for_second_word() {
        let mut completer = ReplCompleter::new(snapshot());
        let suggestions = completer.complete("show t", 6);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "targets");
        assert_eq!(suggestions[0].span.start, 5);
        assert_eq!(suggestions[0].span.end, 6);
    }

    #[test]
    fn test_snapshot_swap_changes_candidates() {
        let handle = snapshot();
        let mut completer = ReplCompleter::new(handle.clone());
        assert_eq!(completer.complete("e", 1).len(), 1);

        // Next cycle: a different snapshot behind the same handle
        let mut replacement = CompletionNode::new();
        replacement.insert_terminal("expire", None);
        replacement.insert_terminal("extend", None);
        *handle.write().unwrap() = replacement;

        assert_eq!(completer.complete("e", 1).len(), 2);
    }

    #[test]
    fn test_descriptions_flow_through() {
        let mut completer = ReplCompleter::new(snapshot());
        let suggestions = completer.complete("sho", 3);
        assert_eq!(
            suggestions[0].description.as_deref(),
            Some("Show stored records")
        );
    }

    #[test]
    fn test_nested_value_kind() {
        let handle = snapshot();
        let tree = handle.read().unwrap();
        assert!(matches!(
            tree.get("show").unwrap().value,
            NodeValue::Nested(_)
        ));
    }
}
