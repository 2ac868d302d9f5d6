//! Completion engine - recursive descent over the command tree
//!
//! Given the per-cycle tree snapshot and the current input document, the
//! engine resolves which node the cursor is inside and yields the matching
//! candidates with their metadata. `complete` is a pure function of its
//! inputs: no caches, no side effects, identical results on identical
//! calls.

use super::node::{CompletionNode, NodeValue};

/// Ephemeral view of the input line used as the traversal accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The text under completion
    pub full_text: String,

    /// Cursor position as a byte offset into `full_text`
    ///
    /// May exceed the text length on derived sub-documents (the consumed
    /// prefix is gone but the offset arithmetic is uniform); accessors
    /// clamp.
    pub cursor_position: usize,
}

impl Document {
    /// Create a new document
    pub fn new(full_text: impl Into<String>, cursor_position: usize) -> Self {
        Self {
            full_text: full_text.into(),
            cursor_position,
        }
    }

    /// Text before the cursor, clamped to the text length
    pub fn text_before_cursor(&self) -> &str {
        let end = self.cursor_position.min(self.full_text.len());
        &self.full_text[..end]
    }
}

/// A suggested word plus metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The word to insert
    pub text: String,

    /// Offset into the word being replaced, counted back from the cursor
    /// (always zero or negative)
    pub replace_from: isize,

    /// Flattened description for display
    pub description: Option<String>,
}

/// Compute completion candidates for a document against a tree snapshot
///
/// Matching is prefix-based and case-sensitive. Candidates are yielded in
/// the tree's insertion order. Once a full word and its separating space
/// have been consumed, candidates come only from the corresponding nested
/// node; a terminal or unrecognized first word yields nothing.
///
/// # Arguments
/// * `tree` - Per-cycle tree snapshot
/// * `document` - Current input text and cursor position
///
/// # Returns
/// * `Vec<Candidate>` - Matching candidates, possibly empty
pub fn complete(tree: &CompletionNode, document: &Document) -> Vec<Candidate> {
    let prefix = document.text_before_cursor().trim_start();

    // A consumed word: descend or stop. Never complete the consumed word
    // and the remainder at the same time.
    if let Some(space_idx) = prefix.find(' ') {
        let first_word = &prefix[..space_idx];
        if let Some(entry) = tree.get(first_word) {
            if let NodeValue::Nested(sub) = &entry.value {
                let remainder = &prefix[space_idx + 1..];
                let sub_document = Document::new(
                    remainder,
                    document.cursor_position.saturating_sub(first_word.len() + 1),
                );
                return complete(sub, &sub_document);
            }
        }
        return Vec::new();
    }

    // Current level: the whole prefix is the word being typed
    let word = prefix;
    tree.entries()
        .filter(|(key, _)| key.starts_with(word))
        .map(|(key, entry)| Candidate {
            text: key.clone(),
            replace_from: -(word.len() as isize),
            description: entry.display_description(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// {show: {targets, vulns}, exit} with a couple of descriptions
    fn sample_tree() -> CompletionNode {
        let mut show = CompletionNode::new();
        show.insert_terminal("targets", Some("List registered targets".to_string()));
        show.insert_terminal("vulns", None);

        let mut root = CompletionNode::new();
        root.insert_nested("show", show, Some("Show stored records".to_string()));
        root.insert_terminal("exit", Some("Leave the shell".to_string()));
        root
    }

    fn at_end(text: &str) -> Document {
        Document::new(text, text.len())
    }

    #[test]
    fn test_empty_document_lists_all_children() {
        let tree = sample_tree();
        let candidates = complete(&tree, &at_end(""));
        let words: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(words, ["show", "exit"]);
        assert!(candidates.iter().all(|c| c.replace_from == 0));
    }

    #[test]
    fn test_prefix_match_top_level() {
        let tree = sample_tree();
        let candidates = complete(&tree, &at_end("sh"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "show");
        assert_eq!(candidates[0].replace_from, -2);
        assert_eq!(
            candidates[0].description.as_deref(),
            Some("Show stored records")
        );
    }

    #[test]
    fn test_descends_into_nested_node() {
        let tree = sample_tree();
        let candidates = complete(&tree, &at_end("show t"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "targets");
        assert_eq!(candidates[0].replace_from, -1);
        assert_eq!(
            candidates[0].description.as_deref(),
            Some("List registered targets")
        );
    }

    #[test]
    fn test_recursion_matches_direct_subnode_invocation() {
        let tree = sample_tree();
        let via_root = complete(&tree, &at_end("show t"));

        // "show t": the space is at position 4, so the sub-document is "t"
        // with the cursor reduced by 5
        let NodeValue::Nested(sub) = &tree.get("show").unwrap().value else {
            panic!("show should be nested");
        };
        let direct = complete(sub, &Document::new("t", "show t".len() - 5));

        assert_eq!(via_root, direct);
    }

    #[test]
    fn test_terminal_word_offers_nothing_after_space() {
        let tree = sample_tree();
        assert!(complete(&tree, &at_end("exit ")).is_empty());
        assert!(complete(&tree, &at_end("exit no")).is_empty());
    }

    #[test]
    fn test_unknown_first_word_offers_nothing() {
        let tree = sample_tree();
        assert!(complete(&tree, &at_end("nope t")).is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let tree = sample_tree();
        assert!(complete(&tree, &at_end("SH")).is_empty());
    }

    #[test]
    fn test_shared_prefixes_are_all_offered() {
        let mut root = CompletionNode::new();
        root.insert_terminal("show", None);
        root.insert_terminal("showall", None);

        let candidates = complete(&root, &at_end("sho"));
        let words: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(words, ["show", "showall"]);

        // The exact word is still a prefix of both
        let candidates = complete(&root, &at_end("show"));
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_leading_whitespace_is_ignored() {
        let tree = sample_tree();
        let candidates = complete(&tree, &at_end("   sh"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "show");
        assert_eq!(candidates[0].replace_from, -2);
    }

    #[test]
    fn test_cursor_mid_line_completes_word_before_it() {
        let tree = sample_tree();
        // Cursor right after "sh", trailing text beyond it is not consulted
        let candidates = complete(&tree, &Document::new("shXXX", 2));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "show");
    }

    #[test]
    fn test_complete_is_idempotent() {
        let tree = sample_tree();
        let document = at_end("show ");
        let first = complete(&tree, &document);
        let second = complete(&tree, &document);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dynamic_identifier_descriptions() {
        // Identifier slot resolved for this cycle: {"3": Prod-API, "7": Staging}
        let mut ids = CompletionNode::new();
        ids.insert_terminal("3", Some("Prod-API".to_string()));
        ids.insert_terminal("7", Some("Staging".to_string()));

        let mut root = CompletionNode::new();
        root.insert_nested("update_target", ids, Some("Update a target".to_string()));

        let candidates = complete(&root, &at_end("update_target 3"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "3");
        assert_eq!(candidates[0].description.as_deref(), Some("Prod-API"));

        let all = complete(&root, &at_end("update_target "));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_deep_nesting_two_levels() {
        let mut inner = CompletionNode::new();
        inner.insert_terminal("verbose", None);

        let mut mid = CompletionNode::new();
        mid.insert_nested("report", inner, None);

        let mut root = CompletionNode::new();
        root.insert_nested("show", mid, None);

        let candidates = complete(&root, &at_end("show report v"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "verbose");
        assert_eq!(candidates[0].replace_from, -1);
    }
}
