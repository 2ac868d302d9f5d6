//! Authored command tree and per-cycle resolution
//!
//! The authored tree describes the command vocabulary once per process:
//! each word maps to a [`SlotValue`] that is either terminal, a fixed
//! sub-tree, or a data-backed slot naming the [`DynamicKind`] whose live
//! identifiers fill it. `resolve` lowers the authored tree plus one round
//! of provider fetches into the concrete [`CompletionNode`] snapshot used
//! for a single prompt cycle, so the recursive engine only ever sees one
//! node shape.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::node::CompletionNode;
use super::provider::{DynamicKind, OptionProvider};

/// What an authored command word maps to
#[derive(Debug, Clone)]
pub enum SlotValue {
    /// No completion beyond this word
    Terminal,

    /// A fixed nested vocabulary
    Fixed(CommandSlots),

    /// Filled with live identifiers of the given kind each cycle
    DataBacked(DynamicKind),
}

/// An authored tree level
#[derive(Debug, Clone, Default)]
pub struct CommandSlots {
    /// (word, value, description) in authored order
    entries: Vec<(&'static str, SlotValue, Option<&'static str>)>,
}

impl CommandSlots {
    /// Create an empty level
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot
    pub fn slot(
        mut self,
        word: &'static str,
        value: SlotValue,
        description: Option<&'static str>,
    ) -> Self {
        self.entries.push((word, value, description));
        self
    }

    /// Iterate slots in authored order
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = &(&'static str, SlotValue, Option<&'static str>)> {
        self.entries.iter()
    }
}

/// The seculog command vocabulary
///
/// Built once per process; dynamic slots are named here and filled by
/// `resolve` each cycle.
pub fn command_slots() -> CommandSlots {
    let show = CommandSlots::new()
        .slot("targets", SlotValue::Terminal, Some("List registered targets"))
        .slot("vulns", SlotValue::Terminal, Some("List recorded vulnerabilities"))
        .slot("all", SlotValue::Terminal, Some("List targets and vulnerabilities"));

    CommandSlots::new()
        .slot("show", SlotValue::Fixed(show), Some("Show stored records"))
        .slot("add_target", SlotValue::Terminal, Some("Add a new target"))
        .slot(
            "add_vuln",
            SlotValue::DataBacked(DynamicKind::Targets),
            Some("Record a vulnerability against a target"),
        )
        .slot(
            "update_target",
            SlotValue::DataBacked(DynamicKind::Targets),
            Some("Update a target field by id"),
        )
        .slot(
            "update_vuln",
            SlotValue::DataBacked(DynamicKind::Vulnerabilities),
            Some("Update a vulnerability field by id"),
        )
        .slot(
            "delete_target",
            SlotValue::DataBacked(DynamicKind::Targets),
            Some("Delete a target and its vulnerabilities"),
        )
        .slot(
            "delete_vuln",
            SlotValue::DataBacked(DynamicKind::Vulnerabilities),
            Some("Delete a vulnerability by id"),
        )
        .slot("help", SlotValue::Terminal, Some("Show the command reference"))
        .slot("clear", SlotValue::Terminal, Some("Clear the screen"))
        .slot("exit", SlotValue::Terminal, Some("Leave the shell"))
}

/// Lower the authored tree into a concrete snapshot for one prompt cycle
///
/// Each [`DynamicKind`] is fetched from the provider exactly once per call,
/// even when several slots share it; each data-backed slot receives its own
/// sub-tree built from that fetch. Static words keep their authored order,
/// dynamic identifiers the provider's order.
pub fn resolve(slots: &CommandSlots, provider: &dyn OptionProvider) -> CompletionNode {
    let mut fetched: HashMap<DynamicKind, IndexMap<String, String>> = HashMap::new();
    lower(slots, provider, &mut fetched)
}

fn lower(
    slots: &CommandSlots,
    provider: &dyn OptionProvider,
    fetched: &mut HashMap<DynamicKind, IndexMap<String, String>>,
) -> CompletionNode {
    let mut node = CompletionNode::new();
    for (word, value, description) in slots.entries() {
        let description = description.map(str::to_string);
        match value {
            SlotValue::Terminal => node.insert_terminal(*word, description),
            SlotValue::Fixed(sub) => {
                node.insert_nested(*word, lower(sub, provider, fetched), description);
            }
            SlotValue::DataBacked(kind) => {
                let options = fetched
                    .entry(*kind)
                    .or_insert_with(|| provider.fetch(*kind));
                let mut sub = CompletionNode::new();
                for (id, label) in options.iter() {
                    sub.insert_terminal(id.clone(), Some(label.clone()));
                }
                node.insert_nested(*word, sub, description);
            }
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::engine::{Document, complete};
    use crate::completion::node::NodeValue;
    use std::cell::RefCell;

    /// Provider yielding fixed options and counting fetches per kind
    struct CountingProvider {
        targets: IndexMap<String, String>,
        vulns: IndexMap<String, String>,
        fetches: RefCell<Vec<DynamicKind>>,
    }

    impl CountingProvider {
        fn new() -> Self {
            let mut targets = IndexMap::new();
            targets.insert("3".to_string(), "Prod-API".to_string());
            targets.insert("7".to_string(), "Staging".to_string());

            let mut vulns = IndexMap::new();
            vulns.insert("1".to_string(), "XSS in login".to_string());

            Self {
                targets,
                vulns,
                fetches: RefCell::new(Vec::new()),
            }
        }
    }

    impl OptionProvider for CountingProvider {
        fn fetch(&self, kind: DynamicKind) -> IndexMap<String, String> {
            self.fetches.borrow_mut().push(kind);
            match kind {
                DynamicKind::Targets => self.targets.clone(),
                DynamicKind::Vulnerabilities => self.vulns.clone(),
            }
        }
    }

    /// Provider standing in for a failing store
    struct EmptyProvider;

    impl OptionProvider for EmptyProvider {
        fn fetch(&self, _kind: DynamicKind) -> IndexMap<String, String> {
            IndexMap::new()
        }
    }

    #[test]
    fn test_static_words_keep_authored_order() {
        let tree = resolve(&command_slots(), &EmptyProvider);
        let words: Vec<&String> = tree.entries().map(|(w, _)| w).collect();
        assert_eq!(
            words,
            [
                "show",
                "add_target",
                "add_vuln",
                "update_target",
                "update_vuln",
                "delete_target",
                "delete_vuln",
                "help",
                "clear",
                "exit"
            ]
        );
    }

    #[test]
    fn test_each_kind_fetched_once_per_cycle() {
        let provider = CountingProvider::new();
        let _tree = resolve(&command_slots(), &provider);

        let fetches = provider.fetches.borrow();
        let target_fetches = fetches
            .iter()
            .filter(|k| **k == DynamicKind::Targets)
            .count();
        let vuln_fetches = fetches
            .iter()
            .filter(|k| **k == DynamicKind::Vulnerabilities)
            .count();
        assert_eq!(target_fetches, 1);
        assert_eq!(vuln_fetches, 1);
    }

    #[test]
    fn test_data_backed_slots_get_identifier_subtrees() {
        let tree = resolve(&command_slots(), &CountingProvider::new());

        let NodeValue::Nested(ids) = &tree.get("update_target").unwrap().value else {
            panic!("update_target should be nested");
        };
        assert_eq!(ids.len(), 2);
        assert_eq!(
            ids.get("3").unwrap().description.as_deref(),
            Some("Prod-API")
        );
    }

    #[test]
    fn test_dynamic_completion_end_to_end() {
        let tree = resolve(&command_slots(), &CountingProvider::new());
        let line = "update_target 3";
        let candidates = complete(&tree, &Document::new(line, line.len()));

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "3");
        assert_eq!(candidates[0].description.as_deref(), Some("Prod-API"));
    }

    #[test]
    fn test_failed_fetch_leaves_static_candidates_intact() {
        let tree = resolve(&command_slots(), &EmptyProvider);

        // No dynamic candidates for the identifier slot
        let line = "delete_target ";
        assert!(complete(&tree, &Document::new(line, line.len())).is_empty());

        // Static completion is unaffected
        let candidates = complete(&tree, &Document::new("sh", 2));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "show");

        let candidates = complete(&tree, &Document::new("show t", 6));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "targets");
    }

    #[test]
    fn test_show_subtree_is_fixed() {
        let tree = resolve(&command_slots(), &EmptyProvider);
        let NodeValue::Nested(show) = &tree.get("show").unwrap().value else {
            panic!("show should be nested");
        };
        let words: Vec<&String> = show.entries().map(|(w, _)| w).collect();
        assert_eq!(words, ["targets", "vulns", "all"]);
    }
}
