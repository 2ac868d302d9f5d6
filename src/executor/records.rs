//! Record mutation handlers
//!
//! Insert, update, and delete operations on targets and vulnerabilities.
//! Each handler performs one store operation and reports the outcome as a
//! message; store errors propagate to the caller, which renders them.

use tracing::info;

use crate::error::Result;
use crate::executor::context::ExecutionContext;
use crate::executor::result::ExecutionResult;
use crate::store::{TargetField, VulnField};

/// Register a new target
pub fn add_target(
    context: &ExecutionContext,
    name: &str,
    url: &str,
    kind: &str,
) -> Result<ExecutionResult> {
    let id = context.store().add_target(name, url, kind)?;
    info!("added target {id} ({name})");
    Ok(ExecutionResult::message(format!(
        "[+] Target '{name}' added successfully (id {id})"
    )))
}

/// Record a vulnerability against an existing target
pub fn add_vuln(
    context: &ExecutionContext,
    target_id: i64,
    title: &str,
    severity: &str,
    cvss: f64,
) -> Result<ExecutionResult> {
    let id = context.store().add_vuln(target_id, title, severity, cvss)?;
    info!("added vulnerability {id} ({title}) for target {target_id}");
    Ok(ExecutionResult::message(format!(
        "[+] Vulnerability '{title}' added successfully (id {id})"
    )))
}

/// Update one field of a target
pub fn update_target(
    context: &ExecutionContext,
    id: i64,
    field: TargetField,
    value: &str,
) -> Result<ExecutionResult> {
    context.store().update_target(id, field, value)?;
    Ok(ExecutionResult::message(format!("[+] Target {id} updated")))
}

/// Update one field of a vulnerability
pub fn update_vuln(
    context: &ExecutionContext,
    id: i64,
    field: VulnField,
    value: &str,
) -> Result<ExecutionResult> {
    context.store().update_vuln(id, field, value)?;
    Ok(ExecutionResult::message(format!(
        "[+] Vulnerability {id} updated"
    )))
}

/// Delete a target together with its vulnerabilities
pub fn delete_target(context: &ExecutionContext, id: i64) -> Result<ExecutionResult> {
    let name = context.store().delete_target(id)?;
    info!("deleted target {id} ({name})");
    Ok(ExecutionResult::message(format!(
        "[+] Target '{name}' and its vulnerabilities deleted"
    )))
}

/// Delete a vulnerability
pub fn delete_vuln(context: &ExecutionContext, id: i64) -> Result<ExecutionResult> {
    context.store().delete_vuln(id)?;
    Ok(ExecutionResult::message(format!(
        "[+] Vulnerability {id} deleted successfully"
    )))
}
