//! Hinter for reedline - provides inline hints based on history

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

/// Seculog hinter for reedline
pub struct ReplHinter {
    /// Style for hints
    style: Style,
    /// Current hint text
    current_hint: String,
}

impl ReplHinter {
    /// Create a new hinter with the default dim style
    pub fn new() -> Self {
        Self {
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
        }
    }
}

impl Default for ReplHinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Hinter for ReplHinter {
    /// Provide a hint for the current line
    ///
    /// # Arguments
    /// * `line` - The current input line
    /// * `pos` - Cursor position
    /// * `history` - Command history
    /// * `use_ansi_coloring` - Whether to use ANSI colors
    /// * `_cwd` - Current working directory (unused)
    ///
    /// # Returns
    /// * `String` - Hint text to display after the cursor
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        // Only provide hints if cursor is at the end of the line
        if pos != line.len() {
            return String::new();
        }

        // Don't hint for empty lines
        if line.trim().is_empty() {
            return String::new();
        }

        // Search history for a matching command
        let search_result = history
            .search(reedline::SearchQuery::last_with_prefix(
                line.to_string(),
                None,
            ))
            .ok()
            .and_then(|results| results.into_iter().next());

        if let Some(history_item) = search_result {
            let history_line = history_item.command_line.as_str();

            // Only show hint if history item is longer than current input
            if history_line.len() > line.len() && history_line.starts_with(line) {
                let hint = &history_line[line.len()..];
                self.current_hint = hint.to_string();

                if use_ansi_coloring {
                    return self.style.paint(hint).to_string();
                } else {
                    return hint.to_string();
                }
            }
        }

        String::new()
    }

    /// Return the next hint token
    fn next_hint_token(&self) -> String {
        String::new()
    }

    /// Return the complete hint
    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }
}
