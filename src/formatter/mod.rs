//! Output formatting and display
//!
//! Turns an [`ExecutionResult`] into terminal output according to the
//! configured output format:
//! - `table`: bordered tables via tabled, severity cells colored
//! - `json`: machine-readable JSON, compact or pretty

pub mod json;
pub mod table;

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::Result;
use crate::executor::ExecutionResult;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Formatter dispatching on the configured output format
pub struct Formatter {
    /// Selected output format
    format: OutputFormat,

    /// Enable colored output
    use_colors: bool,
}

impl Formatter {
    /// Create a formatter
    ///
    /// # Arguments
    /// * `format` - Output format
    /// * `use_colors` - Enable colored output
    pub fn new(format: OutputFormat, use_colors: bool) -> Self {
        Self { format, use_colors }
    }

    /// Create a formatter from display configuration
    pub fn from_config(display_config: &DisplayConfig) -> Self {
        Self::new(display_config.format, display_config.color_output)
    }

    /// Format an execution result
    ///
    /// # Arguments
    /// * `result` - Result to format
    ///
    /// # Returns
    /// * `Result<String>` - Rendered output
    pub fn format(&self, result: &ExecutionResult) -> Result<String> {
        match self.format {
            OutputFormat::Table => TableFormatter::new(self.use_colors).format(&result.data),
            OutputFormat::Json => JsonFormatter::new(false).format(&result.data),
            OutputFormat::JsonPretty => JsonFormatter::new(true).format(&result.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ResultData;

    #[test]
    fn test_message_renders_verbatim_in_table_mode() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = ExecutionResult::message("[+] done");
        assert_eq!(formatter.format(&result).unwrap(), "[+] done");
    }

    #[test]
    fn test_json_mode_wraps_message() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let result = ExecutionResult::message("done");
        let output = formatter.format(&result).unwrap();
        assert_eq!(output, r#"{"message":"done"}"#);
    }

    #[test]
    fn test_none_renders_empty() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = ExecutionResult::with_data(ResultData::None);
        assert_eq!(formatter.format(&result).unwrap(), "");
    }
}
