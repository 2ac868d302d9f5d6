//! Shell-word tokenizer
//!
//! Splits a raw input line into words following POSIX shell conventions:
//! single and double quotes group words, backslashes escape. An opened
//! quote that never closes is a parse error; the caller renders it and
//! must not dispatch the line.

use crate::error::{ParseError, Result};

/// Split a line into shell words
///
/// # Arguments
/// * `line` - Raw input line
///
/// # Returns
/// * `Result<Vec<String>>` - Words, or `ParseError::UnterminatedQuote`.
///   Empty (or whitespace-only) input yields an empty vector.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    // shlex returns None when quoting never terminates
    shlex::split(line).ok_or_else(|| ParseError::UnterminatedQuote.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeculogError;

    #[test]
    fn test_plain_words() {
        let tokens = tokenize("show targets").unwrap();
        assert_eq!(tokens, vec!["show", "targets"]);
    }

    #[test]
    fn test_double_quotes_group_words() {
        let tokens = tokenize(r#"add_target "My Site" example.com Web"#).unwrap();
        assert_eq!(tokens, vec!["add_target", "My Site", "example.com", "Web"]);
    }

    #[test]
    fn test_single_quotes() {
        let tokens = tokenize("add_target 'E-Commerce Shop' shop.example.com Web").unwrap();
        assert_eq!(tokens[1], "E-Commerce Shop");
    }

    #[test]
    fn test_backslash_escape() {
        let tokens = tokenize(r"add_target My\ Site example.com Web").unwrap();
        assert_eq!(tokens[1], "My Site");
    }

    #[test]
    fn test_unterminated_quote_fails() {
        let err = tokenize(r#"add_target "unterminated"#).unwrap_err();
        assert!(matches!(err, SeculogError::Parse(ParseError::UnterminatedQuote)));
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
