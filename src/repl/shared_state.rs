use std::sync::{Arc, RwLock};

use crate::config::{DisplayConfig, OutputFormat};

/// Display state shared between the REPL and the execution context.
#[derive(Debug, Clone)]
pub struct SharedState {
    /// Output format setting
    pub output_format: Arc<RwLock<OutputFormat>>,

    /// Color output setting
    pub color_enabled: Arc<RwLock<bool>>,
}

impl SharedState {
    /// Create shared state from display configuration.
    pub fn with_config(display_config: &DisplayConfig) -> Self {
        Self {
            output_format: Arc::new(RwLock::new(display_config.format)),
            color_enabled: Arc::new(RwLock::new(display_config.color_output)),
        }
    }

    /// Get current output format.
    pub fn get_format(&self) -> OutputFormat {
        *self.output_format.read().unwrap()
    }

    /// Set output format.
    pub fn set_format(&self, format: OutputFormat) {
        *self.output_format.write().unwrap() = format;
    }

    /// Get current color setting.
    pub fn get_color_enabled(&self) -> bool {
        *self.color_enabled.read().unwrap()
    }

    /// Set color output.
    pub fn set_color_enabled(&self, enabled: bool) {
        *self.color_enabled.write().unwrap() = enabled;
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::with_config(&DisplayConfig::default())
    }
}
