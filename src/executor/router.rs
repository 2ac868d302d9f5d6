//! Command router
//!
//! Maps each resolved [`Command`] to its handler. `Exit` and `Clear` are
//! front-end concerns handled before the router is reached; they execute
//! as no-ops here so that routing stays total over the command type.

use crate::error::Result;
use crate::executor::context::ExecutionContext;
use crate::executor::result::ExecutionResult;
use crate::executor::{records, reports};
use crate::parser::Command;

/// Routes commands to their handlers
pub struct CommandRouter {
    /// Session context handed to every handler
    context: ExecutionContext,
}

impl CommandRouter {
    /// Create a new router
    ///
    /// # Arguments
    /// * `context` - Session context
    pub fn new(context: ExecutionContext) -> Self {
        Self { context }
    }

    /// Get the session context
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// Execute a command and return its result
    ///
    /// # Arguments
    /// * `command` - Resolved command
    ///
    /// # Returns
    /// * `Result<ExecutionResult>` - Handler outcome or a typed failure
    pub fn execute(&self, command: Command) -> Result<ExecutionResult> {
        match command {
            Command::AddTarget { name, url, kind } => {
                records::add_target(&self.context, &name, &url, &kind)
            }
            Command::AddVuln {
                target_id,
                title,
                severity,
                cvss,
            } => records::add_vuln(&self.context, target_id, &title, &severity, cvss),
            Command::UpdateTarget { id, field, value } => {
                records::update_target(&self.context, id, field, &value)
            }
            Command::UpdateVuln { id, field, value } => {
                records::update_vuln(&self.context, id, field, &value)
            }
            Command::DeleteTarget { id } => records::delete_target(&self.context, id),
            Command::DeleteVuln { id } => records::delete_vuln(&self.context, id),
            Command::Show(kind) => reports::show(&self.context, kind),
            Command::Help => Ok(reports::help()),
            Command::Clear | Command::Exit => Ok(ExecutionResult::none()),
        }
    }
}
