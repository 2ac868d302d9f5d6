//! Syntax highlighter for seculog command lines

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

/// Highlighter for the flat seculog command vocabulary
pub struct CommandHighlighter {
    enabled: bool,
}

impl CommandHighlighter {
    /// Top-level command words
    const COMMANDS: &'static [&'static str] = &[
        "show",
        "add_target",
        "add_vuln",
        "update_target",
        "update_vuln",
        "delete_target",
        "delete_vuln",
        "help",
        "clear",
        "exit",
        "quit",
    ];

    /// Subcommand and field literals
    const LITERALS: &'static [&'static str] = &[
        "targets", "vulns", "all", "name", "url", "type", "title", "severity", "cvss", "status",
    ];

    /// Create a new highlighter
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn is_command(word: &str) -> bool {
        Self::COMMANDS.contains(&word)
    }

    fn is_literal(word: &str) -> bool {
        Self::LITERALS.contains(&word)
    }

    fn word_style(word: &str, is_first: bool) -> Style {
        if is_first && Self::is_command(word) {
            Color::Green.bold().into()
        } else if !is_first && Self::is_literal(word) {
            Color::Cyan.into()
        } else if !is_first && word.parse::<f64>().is_ok() {
            Color::Magenta.into()
        } else {
            Style::default()
        }
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Highlighter for CommandHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let mut current_word = String::new();
        let mut in_string = false;
        let mut string_delimiter = ' ';
        let mut string_buffer = String::new();
        let mut seen_first_word = false;

        for ch in line.chars() {
            // String literals are painted whole
            if ch == '"' || ch == '\'' {
                if in_string && ch == string_delimiter {
                    string_buffer.push(ch);
                    styled.push((Color::Yellow.into(), string_buffer.clone()));
                    string_buffer.clear();
                    in_string = false;
                } else if !in_string {
                    if !current_word.is_empty() {
                        let style = Self::word_style(&current_word, !seen_first_word);
                        seen_first_word = true;
                        styled.push((style, current_word.clone()));
                        current_word.clear();
                    }
                    in_string = true;
                    string_delimiter = ch;
                    string_buffer.push(ch);
                } else {
                    string_buffer.push(ch);
                }
                continue;
            }

            if in_string {
                string_buffer.push(ch);
                continue;
            }

            if ch.is_whitespace() {
                if !current_word.is_empty() {
                    let style = Self::word_style(&current_word, !seen_first_word);
                    seen_first_word = true;
                    styled.push((style, current_word.clone()));
                    current_word.clear();
                }
                styled.push((Style::default(), ch.to_string()));
            } else {
                current_word.push(ch);
            }
        }

        if !current_word.is_empty() {
            let style = Self::word_style(&current_word, !seen_first_word);
            styled.push((style, current_word));
        }
        if in_string {
            // Unclosed string
            styled.push((Color::Yellow.into(), string_buffer));
        }

        styled
    }
}
