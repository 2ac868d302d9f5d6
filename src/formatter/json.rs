//! JSON formatting for findings
//!
//! Machine-readable output, compact or pretty-printed. Record structs
//! serialize directly; messages are wrapped in a `message` object so the
//! output is always valid JSON.

use serde_json::json;

use crate::error::{Result, SeculogError};
use crate::executor::ResultData;

/// JSON formatter
pub struct JsonFormatter {
    /// Pretty-print with indentation
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Pretty-print with indentation
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Format result data as JSON
    ///
    /// # Arguments
    /// * `data` - Result data to format
    ///
    /// # Returns
    /// * `Result<String>` - JSON string
    pub fn format(&self, data: &ResultData) -> Result<String> {
        let value = match data {
            ResultData::Targets(targets) => json!(targets),
            ResultData::Vulns(vulns) => json!(vulns),
            ResultData::Overview { targets, vulns } => json!({
                "targets": targets,
                "vulns": vulns,
            }),
            ResultData::Help(entries) => json!(
                entries
                    .iter()
                    .map(|e| json!({"command": e.command, "description": e.description}))
                    .collect::<Vec<_>>()
            ),
            ResultData::Message(msg) => json!({ "message": msg }),
            ResultData::None => return Ok(String::new()),
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.map_err(|e| SeculogError::Generic(format!("JSON encoding failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Target;

    fn sample_target() -> Target {
        Target {
            id: 3,
            name: "Prod-API".to_string(),
            url: Some("api.example.com".to_string()),
            kind: Some("Web".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_targets_serialize_as_array() {
        let formatter = JsonFormatter::new(false);
        let output = formatter
            .format(&ResultData::Targets(vec![sample_target()]))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], 3);
        assert_eq!(parsed[0]["name"], "Prod-API");
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let formatter = JsonFormatter::new(true);
        let output = formatter
            .format(&ResultData::Targets(vec![sample_target()]))
            .unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_overview_has_both_keys() {
        let formatter = JsonFormatter::new(false);
        let output = formatter
            .format(&ResultData::Overview {
                targets: Vec::new(),
                vulns: Vec::new(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("targets").is_some());
        assert!(parsed.get("vulns").is_some());
    }

    #[test]
    fn test_empty_listing_is_empty_array() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format(&ResultData::Vulns(Vec::new())).unwrap();
        assert_eq!(output, "[]");
    }
}
