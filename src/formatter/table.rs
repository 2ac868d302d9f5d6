//! Table formatting for findings using tabled
//!
//! Renders targets, vulnerability reports, and the help reference as
//! bordered tables. Severity cells are colored by level when colors are
//! enabled.

use nu_ansi_term::{Color, Style};
use tabled::{
    builder::Builder,
    settings::{Modify, Style as TableStyle, object::Rows, width::Width},
};

use crate::error::Result;
use crate::executor::{HelpEntry, ResultData};
use crate::store::{Target, VulnReportRow};

/// Maximum width for a single column (characters)
const MAX_COLUMN_WIDTH: usize = 40;

/// Table formatter for findings
pub struct TableFormatter {
    /// Enable colored output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored output
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format result data as tables
    ///
    /// # Arguments
    /// * `data` - Result data to format
    ///
    /// # Returns
    /// * `Result<String>` - Rendered output
    pub fn format(&self, data: &ResultData) -> Result<String> {
        match data {
            ResultData::Targets(targets) => Ok(self.format_targets(targets)),
            ResultData::Vulns(vulns) => Ok(self.format_vulns(vulns)),
            ResultData::Overview { targets, vulns } => Ok(format!(
                "{}\n\n{}",
                self.format_targets(targets),
                self.format_vulns(vulns)
            )),
            ResultData::Help(entries) => Ok(self.format_help(entries)),
            ResultData::Message(msg) => Ok(msg.clone()),
            ResultData::None => Ok(String::new()),
        }
    }

    fn format_targets(&self, targets: &[Target]) -> String {
        if targets.is_empty() {
            return "No targets found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "URL", "Type", "Created"]);
        for target in targets {
            builder.push_record([
                target.id.to_string(),
                target.name.clone(),
                target.url.clone().unwrap_or_else(|| "-".to_string()),
                target.kind.clone().unwrap_or_else(|| "-".to_string()),
                target
                    .created_at
                    .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }

        format!("Registered Targets\n{}", self.render(builder))
    }

    fn format_vulns(&self, vulns: &[VulnReportRow]) -> String {
        if vulns.is_empty() {
            return "No vulnerabilities found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Target", "Vulnerability", "Severity", "CVSS", "Status"]);
        for vuln in vulns {
            builder.push_record([
                vuln.id.to_string(),
                vuln.target.clone(),
                vuln.title.clone(),
                self.paint_severity(&vuln.severity),
                vuln.cvss.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
                vuln.status.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }

        format!("Vulnerability Report\n{}", self.render(builder))
    }

    fn format_help(&self, entries: &[HelpEntry]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Command", "Description"]);
        for entry in entries {
            builder.push_record([entry.command, entry.description]);
        }

        format!("Available Commands\n{}", self.render(builder))
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(TableStyle::modern())
            .with(Modify::new(Rows::new(1..)).with(Width::truncate(MAX_COLUMN_WIDTH)));
        table.to_string()
    }

    /// Color a severity label by level
    fn paint_severity(&self, severity: &str) -> String {
        if !self.use_colors {
            return severity.to_string();
        }

        let style: Style = match severity.to_lowercase().as_str() {
            "critical" => Color::Red.bold().into(),
            "high" => Color::Red.into(),
            "medium" => Color::Yellow.into(),
            _ => Color::Green.into(),
        };
        style.paint(severity).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_target() -> Target {
        Target {
            id: 1,
            name: "Prod API".to_string(),
            url: Some("api.example.com".to_string()),
            kind: Some("Web".to_string()),
            created_at: None,
        }
    }

    fn sample_vuln(severity: &str) -> VulnReportRow {
        VulnReportRow {
            id: 1,
            target: "Prod API".to_string(),
            title: "SQL injection".to_string(),
            severity: severity.to_string(),
            cvss: Some(9.8),
            status: None,
        }
    }

    #[test]
    fn test_empty_listings_use_placeholder_text() {
        let formatter = TableFormatter::new(false);
        assert_eq!(
            formatter.format(&ResultData::Targets(Vec::new())).unwrap(),
            "No targets found."
        );
        assert_eq!(
            formatter.format(&ResultData::Vulns(Vec::new())).unwrap(),
            "No vulnerabilities found."
        );
    }

    #[test]
    fn test_target_table_contains_fields() {
        let formatter = TableFormatter::new(false);
        let output = formatter
            .format(&ResultData::Targets(vec![sample_target()]))
            .unwrap();
        assert!(output.contains("Registered Targets"));
        assert!(output.contains("Prod API"));
        assert!(output.contains("api.example.com"));
        assert!(output.contains("Web"));
    }

    #[test]
    fn test_vuln_table_plain_without_colors() {
        let formatter = TableFormatter::new(false);
        let output = formatter
            .format(&ResultData::Vulns(vec![sample_vuln("Critical")]))
            .unwrap();
        assert!(output.contains("Critical"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_severity_is_painted_with_colors() {
        let formatter = TableFormatter::new(true);
        let painted = formatter.paint_severity("High");
        assert!(painted.contains("High"));
        assert!(painted.contains("\u{1b}["));
    }

    #[test]
    fn test_overview_renders_both_sections() {
        let formatter = TableFormatter::new(false);
        let output = formatter
            .format(&ResultData::Overview {
                targets: vec![sample_target()],
                vulns: Vec::new(),
            })
            .unwrap();
        assert!(output.contains("Registered Targets"));
        assert!(output.contains("No vulnerabilities found."));
    }

    #[test]
    fn test_help_table() {
        let formatter = TableFormatter::new(false);
        let entries = vec![HelpEntry {
            command: "exit",
            description: "Leave the shell",
        }];
        let output = formatter.format(&ResultData::Help(entries)).unwrap();
        assert!(output.contains("Available Commands"));
        assert!(output.contains("exit"));
    }
}
