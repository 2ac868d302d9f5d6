//! Execution result types
//!
//! This module defines the data structures for representing command
//! execution results. The formatter turns a [`ResultData`] into terminal
//! output according to the configured output format.

use crate::store::{Target, VulnReportRow};

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Result data (records, message, ...)
    pub data: ResultData,
}

/// One row of the help table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Command syntax
    pub command: &'static str,

    /// What the command does
    pub description: &'static str,
}

/// Data returned from command execution
#[derive(Debug, Clone)]
pub enum ResultData {
    /// Registered targets
    Targets(Vec<Target>),

    /// Vulnerability report rows
    Vulns(Vec<VulnReportRow>),

    /// Both listings together (`show all`)
    Overview {
        targets: Vec<Target>,
        vulns: Vec<VulnReportRow>,
    },

    /// The command reference
    Help(Vec<HelpEntry>),

    /// Text message
    Message(String),

    /// No data
    None,
}

impl ExecutionResult {
    /// Create a result carrying data
    pub fn with_data(data: ResultData) -> Self {
        Self { data }
    }

    /// Create a plain message result
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: ResultData::Message(message.into()),
        }
    }

    /// Create an empty result
    pub fn none() -> Self {
        Self {
            data: ResultData::None,
        }
    }
}
