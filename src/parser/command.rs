//! Typed shell commands
//!
//! This module resolves a tokenized line into a [`Command`]. The first token
//! is the command name, matched case-insensitively against a fixed table;
//! `show` and the `update_*` commands additionally validate a literal
//! argument against a fixed set. Resolution failures are [`DispatchError`]s
//! rendered by the caller; they never terminate the shell.

use crate::error::{DispatchError, Result};
use crate::store::{TargetField, VulnField};

/// What `show` should display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowKind {
    Targets,
    Vulns,
    All,
}

impl ShowKind {
    /// Accepted subcommand literals, in display order
    pub const LITERALS: &'static [&'static str] = &["targets", "vulns", "all"];

    fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "targets" => Some(Self::Targets),
            "vulns" => Some(Self::Vulns),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// A fully resolved shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new target
    AddTarget {
        name: String,
        url: String,
        kind: String,
    },

    /// Record a vulnerability against an existing target
    AddVuln {
        target_id: i64,
        title: String,
        severity: String,
        cvss: f64,
    },

    /// Update one field of a target
    UpdateTarget {
        id: i64,
        field: TargetField,
        value: String,
    },

    /// Update one field of a vulnerability
    UpdateVuln {
        id: i64,
        field: VulnField,
        value: String,
    },

    /// Delete a target and its vulnerabilities
    DeleteTarget { id: i64 },

    /// Delete a vulnerability
    DeleteVuln { id: i64 },

    /// List targets and/or vulnerabilities
    Show(ShowKind),

    /// Show the command reference
    Help,

    /// Clear the screen
    Clear,

    /// Leave the shell
    Exit,
}

impl Command {
    /// Resolve a token sequence into a command
    ///
    /// # Arguments
    /// * `tokens` - Non-empty token sequence; `tokens[0]` is the command name
    ///
    /// # Returns
    /// * `Result<Command>` - Resolved command, or a `DispatchError`
    pub fn resolve(tokens: &[String]) -> Result<Command> {
        let name = tokens[0].to_lowercase();
        let args = &tokens[1..];

        match name.as_str() {
            "add_target" => Self::resolve_add_target(args),
            "add_vuln" => Self::resolve_add_vuln(args),
            "update_target" => Self::resolve_update_target(args),
            "update_vuln" => Self::resolve_update_vuln(args),
            "delete_target" => {
                let id = Self::parse_id(args, "delete_target <id>")?;
                Ok(Command::DeleteTarget { id })
            }
            "delete_vuln" => {
                let id = Self::parse_id(args, "delete_vuln <id>")?;
                Ok(Command::DeleteVuln { id })
            }
            "show" => Self::resolve_show(args),
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "exit" | "quit" => Ok(Command::Exit),
            _ => Err(DispatchError::UnknownCommand(name).into()),
        }
    }

    fn resolve_add_target(args: &[String]) -> Result<Command> {
        let [name, url, kind] = args else {
            return Err(DispatchError::BadArguments {
                usage: "add_target <name> <url> <type>",
            }
            .into());
        };
        Ok(Command::AddTarget {
            name: name.clone(),
            url: url.clone(),
            kind: kind.clone(),
        })
    }

    fn resolve_add_vuln(args: &[String]) -> Result<Command> {
        let [target_id, title, severity, cvss] = args else {
            return Err(DispatchError::BadArguments {
                usage: "add_vuln <target_id> <title> <severity> <cvss>",
            }
            .into());
        };
        let target_id = target_id.parse().map_err(|_| DispatchError::InvalidValue {
            expected: "integer target id",
            given: target_id.clone(),
        })?;
        let cvss = cvss.parse().map_err(|_| DispatchError::InvalidValue {
            expected: "numeric CVSS score",
            given: cvss.clone(),
        })?;
        Ok(Command::AddVuln {
            target_id,
            title: title.clone(),
            severity: severity.clone(),
            cvss,
        })
    }

    fn resolve_update_target(args: &[String]) -> Result<Command> {
        let [id, field, value] = args else {
            return Err(DispatchError::BadArguments {
                usage: "update_target <id> <name|url|type> <value>",
            }
            .into());
        };
        let id = Self::parse_one_id(id)?;
        let field =
            TargetField::from_literal(field).ok_or_else(|| DispatchError::InvalidSubcommand {
                given: Some(field.clone()),
                expected: TargetField::LITERALS,
            })?;
        Ok(Command::UpdateTarget {
            id,
            field,
            value: value.clone(),
        })
    }

    fn resolve_update_vuln(args: &[String]) -> Result<Command> {
        let [id, field, value] = args else {
            return Err(DispatchError::BadArguments {
                usage: "update_vuln <id> <title|severity|cvss|status> <value>",
            }
            .into());
        };
        let id = Self::parse_one_id(id)?;
        let field =
            VulnField::from_literal(field).ok_or_else(|| DispatchError::InvalidSubcommand {
                given: Some(field.clone()),
                expected: VulnField::LITERALS,
            })?;
        if field == VulnField::Cvss && value.parse::<f64>().is_err() {
            return Err(DispatchError::InvalidValue {
                expected: "numeric CVSS score",
                given: value.clone(),
            }
            .into());
        }
        Ok(Command::UpdateVuln {
            id,
            field,
            value: value.clone(),
        })
    }

    fn resolve_show(args: &[String]) -> Result<Command> {
        let kind = args
            .first()
            .map(|sub| {
                ShowKind::from_literal(sub).ok_or(DispatchError::InvalidSubcommand {
                    given: Some(sub.clone()),
                    expected: ShowKind::LITERALS,
                })
            })
            .transpose()?
            .ok_or(DispatchError::InvalidSubcommand {
                given: None,
                expected: ShowKind::LITERALS,
            })?;
        Ok(Command::Show(kind))
    }

    fn parse_id(args: &[String], usage: &'static str) -> Result<i64> {
        let [id] = args else {
            return Err(DispatchError::BadArguments { usage }.into());
        };
        Self::parse_one_id(id)
    }

    fn parse_one_id(id: &str) -> Result<i64> {
        id.parse().map_err(|_| {
            DispatchError::InvalidValue {
                expected: "integer id",
                given: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeculogError;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let cmd = Command::resolve(&toks(&["SHOW", "targets"])).unwrap();
        assert_eq!(cmd, Command::Show(ShowKind::Targets));

        let cmd = Command::resolve(&toks(&["Exit"])).unwrap();
        assert_eq!(cmd, Command::Exit);
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::resolve(&toks(&["frobnicate"])).unwrap_err();
        assert!(matches!(
            err,
            SeculogError::Dispatch(DispatchError::UnknownCommand(name)) if name == "frobnicate"
        ));
    }

    #[test]
    fn test_show_requires_valid_subcommand() {
        let err = Command::resolve(&toks(&["show", "everything"])).unwrap_err();
        let SeculogError::Dispatch(DispatchError::InvalidSubcommand { given, expected }) = err
        else {
            panic!("expected InvalidSubcommand");
        };
        assert_eq!(given.as_deref(), Some("everything"));
        assert_eq!(expected, ShowKind::LITERALS);
    }

    #[test]
    fn test_show_without_subcommand() {
        let err = Command::resolve(&toks(&["show"])).unwrap_err();
        assert!(matches!(
            err,
            SeculogError::Dispatch(DispatchError::InvalidSubcommand { given: None, .. })
        ));
    }

    #[test]
    fn test_show_all() {
        let cmd = Command::resolve(&toks(&["show", "all"])).unwrap();
        assert_eq!(cmd, Command::Show(ShowKind::All));
    }

    #[test]
    fn test_add_target_arity() {
        let err = Command::resolve(&toks(&["add_target", "only-name"])).unwrap_err();
        assert!(matches!(
            err,
            SeculogError::Dispatch(DispatchError::BadArguments { .. })
        ));

        let cmd =
            Command::resolve(&toks(&["add_target", "My Site", "example.com", "Web"])).unwrap();
        assert_eq!(
            cmd,
            Command::AddTarget {
                name: "My Site".to_string(),
                url: "example.com".to_string(),
                kind: "Web".to_string(),
            }
        );
    }

    #[test]
    fn test_add_vuln_parses_numbers() {
        let cmd = Command::resolve(&toks(&["add_vuln", "3", "XSS", "High", "7.1"])).unwrap();
        assert_eq!(
            cmd,
            Command::AddVuln {
                target_id: 3,
                title: "XSS".to_string(),
                severity: "High".to_string(),
                cvss: 7.1,
            }
        );

        let err = Command::resolve(&toks(&["add_vuln", "abc", "XSS", "High", "7.1"])).unwrap_err();
        assert!(matches!(
            err,
            SeculogError::Dispatch(DispatchError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_update_target_field_literal() {
        let cmd =
            Command::resolve(&toks(&["update_target", "3", "name", "Renamed"])).unwrap();
        assert_eq!(
            cmd,
            Command::UpdateTarget {
                id: 3,
                field: TargetField::Name,
                value: "Renamed".to_string(),
            }
        );

        let err = Command::resolve(&toks(&["update_target", "3", "severity", "x"])).unwrap_err();
        let SeculogError::Dispatch(DispatchError::InvalidSubcommand { expected, .. }) = err else {
            panic!("expected InvalidSubcommand");
        };
        assert_eq!(expected, TargetField::LITERALS);
    }

    #[test]
    fn test_update_vuln_cvss_must_be_numeric() {
        let err =
            Command::resolve(&toks(&["update_vuln", "2", "cvss", "critical"])).unwrap_err();
        assert!(matches!(
            err,
            SeculogError::Dispatch(DispatchError::InvalidValue { .. })
        ));

        let cmd = Command::resolve(&toks(&["update_vuln", "2", "cvss", "9.8"])).unwrap();
        assert!(matches!(cmd, Command::UpdateVuln { .. }));
    }

    #[test]
    fn test_delete_commands() {
        assert_eq!(
            Command::resolve(&toks(&["delete_target", "4"])).unwrap(),
            Command::DeleteTarget { id: 4 }
        );
        assert_eq!(
            Command::resolve(&toks(&["delete_vuln", "9"])).unwrap(),
            Command::DeleteVuln { id: 9 }
        );
    }

    #[test]
    fn test_quit_is_exit_alias() {
        assert_eq!(Command::resolve(&toks(&["quit"])).unwrap(), Command::Exit);
    }
}
