//! Listing and help handlers

use crate::error::Result;
use crate::executor::context::ExecutionContext;
use crate::executor::result::{ExecutionResult, HelpEntry, ResultData};
use crate::parser::ShowKind;

/// The command reference shown by `help`
pub const HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry {
        command: "show <targets|vulns|all>",
        description: "List stored records",
    },
    HelpEntry {
        command: "add_target <name> <url> <type>",
        description: "Add a new target",
    },
    HelpEntry {
        command: "add_vuln <target_id> <title> <severity> <cvss>",
        description: "Record a vulnerability against a target",
    },
    HelpEntry {
        command: "update_target <id> <name|url|type> <value>",
        description: "Update a target field",
    },
    HelpEntry {
        command: "update_vuln <id> <title|severity|cvss|status> <value>",
        description: "Update a vulnerability field",
    },
    HelpEntry {
        command: "delete_target <id>",
        description: "Delete a target and its vulnerabilities",
    },
    HelpEntry {
        command: "delete_vuln <id>",
        description: "Delete a vulnerability",
    },
    HelpEntry {
        command: "help",
        description: "Show this command reference",
    },
    HelpEntry {
        command: "clear",
        description: "Clear the screen",
    },
    HelpEntry {
        command: "exit",
        description: "Leave the shell",
    },
];

/// List targets, vulnerabilities, or both
pub fn show(context: &ExecutionContext, kind: ShowKind) -> Result<ExecutionResult> {
    let data = match kind {
        ShowKind::Targets => ResultData::Targets(context.store().list_targets()?),
        ShowKind::Vulns => ResultData::Vulns(context.store().list_vulns()?),
        ShowKind::All => ResultData::Overview {
            targets: context.store().list_targets()?,
            vulns: context.store().list_vulns()?,
        },
    };
    Ok(ExecutionResult::with_data(data))
}

/// Show the command reference
pub fn help() -> ExecutionResult {
    ExecutionResult::with_data(ResultData::Help(HELP_ENTRIES.to_vec()))
}
