//! REPL engine for interactive command execution
//!
//! Owns the reedline editor and the per-cycle completion snapshot. Before
//! every prompt the engine fetches fresh dynamic options, lowers the
//! authored command tree into a new snapshot, and swaps it into the shared
//! handle the completer reads on every keystroke. The snapshot is
//! discarded with the prompt cycle; nothing survives an iteration.

use std::sync::{Arc, RwLock};

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};

use crate::completion::{
    CommandSlots, CompletionNode, StoreOptionProvider, command_slots, resolve,
};
use crate::config::{DisplayConfig, HistoryConfig};
use crate::error::{Result, SeculogError};
use crate::repl::completer::ReplCompleter;
use crate::repl::highlighter::CommandHighlighter;
use crate::repl::hinter::ReplHinter;
use crate::repl::prompt::SeculogPrompt;

/// Name of the completion menu registered with reedline
const COMPLETION_MENU: &str = "completion_menu";

/// Outcome of one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplSignal {
    /// A submitted line
    Line(String),

    /// Ctrl-C: abandon the current line, re-prompt
    Interrupt,

    /// Ctrl-D: close the session gracefully
    EndOfInput,
}

/// REPL engine for interactive command execution
pub struct ReplEngine {
    /// Line editor
    editor: Reedline,

    /// Prompt renderer
    prompt: SeculogPrompt,

    /// Snapshot handle shared with the completer
    snapshot: Arc<RwLock<CompletionNode>>,

    /// Authored command vocabulary
    slots: CommandSlots,

    /// Live option source for data-backed slots
    provider: StoreOptionProvider,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `history_config` - History configuration
    /// * `display_config` - Display configuration (highlighting toggle)
    /// * `provider` - Dynamic option source for completion
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        history_config: &HistoryConfig,
        display_config: &DisplayConfig,
        provider: StoreOptionProvider,
    ) -> Result<Self> {
        let snapshot = Arc::new(RwLock::new(CompletionNode::new()));

        let completion_menu = Box::new(ColumnarMenu::default().with_name(COMPLETION_MENU));
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let mut editor = Reedline::create()
            .with_completer(Box::new(ReplCompleter::new(snapshot.clone())))
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_hinter(Box::new(ReplHinter::new()))
            .with_highlighter(Box::new(CommandHighlighter::new(
                display_config.syntax_highlighting,
            )));

        if history_config.persist {
            let history = FileBackedHistory::with_file(
                history_config.max_size,
                history_config.file_path.clone(),
            )
            .map_err(|e| SeculogError::Generic(format!("Failed to open history: {e}")))?;
            editor = editor.with_history(Box::new(history));
        }

        Ok(Self {
            editor,
            prompt: SeculogPrompt::new(),
            snapshot,
            slots: command_slots(),
            provider,
        })
    }

    /// Read one line of input
    ///
    /// Rebuilds the completion snapshot first, so the prompt that opens
    /// always completes against the latest committed records.
    ///
    /// # Returns
    /// * `Result<ReplSignal>` - Submitted line, interrupt, or end of input
    pub fn read_line(&mut self) -> Result<ReplSignal> {
        self.refresh_completions();

        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(ReplSignal::Line(line)),
            Ok(Signal::CtrlC) => Ok(ReplSignal::Interrupt),
            Ok(Signal::CtrlD) => Ok(ReplSignal::EndOfInput),
            Err(e) => Err(SeculogError::Generic(format!("Read error: {e}"))),
        }
    }

    /// Lower a fresh completion snapshot for the next prompt cycle
    fn refresh_completions(&mut self) {
        let tree = resolve(&self.slots, &self.provider);
        *self.snapshot.write().unwrap() = tree;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_refresh_picks_up_new_records() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::with_path(dir.path().join("findings.db"));
        store.ensure_schema().unwrap();

        let snapshot = Arc::new(RwLock::new(CompletionNode::new()));
        let slots = command_slots();
        let provider = StoreOptionProvider::new(store.clone());

        // First cycle: no targets, the identifier slot is empty
        *snapshot.write().unwrap() = resolve(&slots, &provider);
        {
            let tree = snapshot.read().unwrap();
            let crate::completion::NodeValue::Nested(ids) =
                &tree.get("delete_target").unwrap().value
            else {
                panic!("delete_target should be nested");
            };
            assert!(ids.is_empty());
        }

        // A record lands between cycles
        store.add_target("Prod", "prod.example.com", "Web").unwrap();

        // Next cycle sees it
        *snapshot.write().unwrap() = resolve(&slots, &provider);
        {
            let tree = snapshot.read().unwrap();
            let crate::completion::NodeValue::Nested(ids) =
                &tree.get("delete_target").unwrap().value
            else {
                panic!("delete_target should be nested");
            };
            assert_eq!(ids.len(), 1);
            assert_eq!(ids.get("1").unwrap().description.as_deref(), Some("Prod"));
        }
    }
}
