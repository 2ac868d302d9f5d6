//! Record store for security findings
//!
//! This module provides access to the local SQLite database holding the two
//! finding entities:
//! - Targets: systems under assessment
//! - Vulnerabilities: findings attached to a target
//!
//! A connection is opened per discrete operation and released when the
//! operation returns; there is no pooling and no long-lived handle. Foreign
//! keys are enabled on every connection so that deleting a target cascades
//! to its vulnerabilities.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rusqlite::{Connection, params};
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// A registered assessment target
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    /// Row id
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// Target URL or IP
    pub url: Option<String>,

    /// Target kind (Web, Mobile, Network, IoT, ...)
    pub kind: Option<String>,

    /// Creation timestamp
    pub created_at: Option<NaiveDateTime>,
}

/// A vulnerability joined with its target's name, as shown in reports
#[derive(Debug, Clone, Serialize)]
pub struct VulnReportRow {
    /// Row id
    pub id: i64,

    /// Name of the target this finding belongs to
    pub target: String,

    /// Finding title
    pub title: String,

    /// Severity label (Critical, High, Medium, Low, ...)
    pub severity: String,

    /// CVSS score
    pub cvss: Option<f64>,

    /// Workflow status, if set
    pub status: Option<String>,
}

/// Updatable target columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    Name,
    Url,
    Kind,
}

impl TargetField {
    /// Accepted field literals, in display order
    pub const LITERALS: &'static [&'static str] = &["name", "url", "type"];

    /// Resolve a user-typed literal
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "name" => Some(Self::Name),
            "url" => Some(Self::Url),
            "type" => Some(Self::Kind),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Url => "target_url",
            Self::Kind => "target_type",
        }
    }
}

/// Updatable vulnerability columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VulnField {
    Title,
    Severity,
    Cvss,
    Status,
}

impl VulnField {
    /// Accepted field literals, in display order
    pub const LITERALS: &'static [&'static str] = &["title", "severity", "cvss", "status"];

    /// Resolve a user-typed literal
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "title" => Some(Self::Title),
            "severity" => Some(Self::Severity),
            "cvss" => Some(Self::Cvss),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Severity => "severity",
            Self::Cvss => "cvss_score",
            Self::Status => "status",
        }
    }
}

/// SQLite-backed record store
///
/// Holds only the database path; every operation opens its own connection.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Path to the database file
    database_path: PathBuf,
}

impl RecordStore {
    /// Create a new record store
    ///
    /// # Arguments
    /// * `config` - Store configuration
    ///
    /// # Returns
    /// * `Self` - New record store instance
    pub fn new(config: StoreConfig) -> Self {
        Self {
            database_path: config.database_path,
        }
    }

    /// Create a record store for an explicit database path
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            database_path: path.into(),
        }
    }

    /// Get the database path
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Open a connection for one operation
    fn connection(&self) -> Result<Connection> {
        if let Some(parent) = self.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&self.database_path)
            .map_err(|e| StoreError::Open(e.to_string()))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(conn)
    }

    /// Create the tables if they do not exist
    ///
    /// Idempotent; called once at startup.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS targets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                target_url TEXT UNIQUE,
                target_type TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            CREATE TABLE IF NOT EXISTS vulnerabilities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                target_id INTEGER,
                title TEXT NOT NULL,
                severity TEXT NOT NULL,
                cvss_score REAL,
                vuln_type TEXT,
                description TEXT,
                poc_steps TEXT,
                status TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (target_id) REFERENCES targets(id) ON DELETE CASCADE
            );",
        )?;
        Ok(())
    }

    /// Insert a new target
    ///
    /// # Arguments
    /// * `name` - Target name
    /// * `url` - Target URL or IP
    /// * `kind` - Target kind (Web, Mobile, Network, IoT, ...)
    ///
    /// # Returns
    /// * `Result<i64>` - Id of the inserted row
    pub fn add_target(&self, name: &str, url: &str, kind: &str) -> Result<i64> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO targets (name, target_url, target_type) VALUES (?1, ?2, ?3)",
            params![name, url, kind],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(inner, _)
                if inner.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::DuplicateUrl(url.to_string())
            }
            other => StoreError::Query(other.to_string()),
        })?;
        Ok(conn.last_insert_rowid())
    }

    /// List all targets, oldest first
    pub fn list_targets(&self) -> Result<Vec<Target>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, target_url, target_type, created_at FROM targets ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Target {
                id: row.get(0)?,
                name: row.get(1)?,
                url: row.get(2)?,
                kind: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        let mut targets = Vec::new();
        for row in rows {
            targets.push(row?);
        }
        Ok(targets)
    }

    /// Update a single target column
    ///
    /// # Arguments
    /// * `id` - Target id
    /// * `field` - Column to update
    /// * `value` - New value
    pub fn update_target(&self, id: i64, field: TargetField, value: &str) -> Result<()> {
        let conn = self.connection()?;
        let sql = format!("UPDATE targets SET {} = ?1 WHERE id = ?2", field.column());
        let changed = conn.execute(&sql, params![value, id])?;
        if changed == 0 {
            return Err(StoreError::TargetNotFound(id).into());
        }
        Ok(())
    }

    /// Delete a target and all of its vulnerabilities
    ///
    /// # Arguments
    /// * `id` - Target id
    ///
    /// # Returns
    /// * `Result<String>` - Name of the deleted target
    pub fn delete_target(&self, id: i64) -> Result<String> {
        let conn = self.connection()?;
        let name: Option<String> = conn
            .query_row("SELECT name FROM targets WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(StoreError::Query(other.to_string())),
            })?;

        let Some(name) = name else {
            return Err(StoreError::TargetNotFound(id).into());
        };

        // Explicit child delete: FK cascade covers this only when the
        // database was always opened with foreign keys on.
        conn.execute(
            "DELETE FROM vulnerabilities WHERE target_id = ?1",
            params![id],
        )?;
        conn.execute("DELETE FROM targets WHERE id = ?1", params![id])?;
        Ok(name)
    }

    /// Insert a new vulnerability for an existing target
    ///
    /// # Arguments
    /// * `target_id` - Owning target id (must exist)
    /// * `title` - Finding title
    /// * `severity` - Severity label
    /// * `cvss` - CVSS score
    ///
    /// # Returns
    /// * `Result<i64>` - Id of the inserted row
    pub fn add_vuln(&self, target_id: i64, title: &str, severity: &str, cvss: f64) -> Result<i64> {
        let conn = self.connection()?;
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM targets WHERE id = ?1",
                params![target_id],
                |_| Ok(true),
            )
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(false),
                other => Err(StoreError::Query(other.to_string())),
            })?;
        if !exists {
            return Err(StoreError::TargetNotFound(target_id).into());
        }

        conn.execute(
            "INSERT INTO vulnerabilities (target_id, title, severity, cvss_score)
             VALUES (?1, ?2, ?3, ?4)",
            params![target_id, title, severity, cvss],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List all vulnerabilities joined with their target names, oldest first
    pub fn list_vulns(&self) -> Result<Vec<VulnReportRow>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT v.id, t.name, v.title, v.severity, v.cvss_score, v.status
             FROM vulnerabilities v
             JOIN targets t ON v.target_id = t.id
             ORDER BY v.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(VulnReportRow {
                id: row.get(0)?,
                target: row.get(1)?,
                title: row.get(2)?,
                severity: row.get(3)?,
                cvss: row.get(4)?,
                status: row.get(5)?,
            })
        })?;
        let mut vulns = Vec::new();
        for row in rows {
            vulns.push(row?);
        }
        Ok(vulns)
    }

    /// Update a single vulnerability column
    ///
    /// # Arguments
    /// * `id` - Vulnerability id
    /// * `field` - Column to update
    /// * `value` - New value (numeric for the CVSS column)
    pub fn update_vuln(&self, id: i64, field: VulnField, value: &str) -> Result<()> {
        let conn = self.connection()?;
        let sql = format!(
            "UPDATE vulnerabilities SET {} = ?1 WHERE id = ?2",
            field.column()
        );
        let changed = if field == VulnField::Cvss {
            let score: f64 = value
                .parse()
                .map_err(|_| StoreError::Query(format!("cvss must be numeric, got '{value}'")))?;
            conn.execute(&sql, params![score, id])?
        } else {
            conn.execute(&sql, params![value, id])?
        };
        if changed == 0 {
            return Err(StoreError::VulnNotFound(id).into());
        }
        Ok(())
    }

    /// Delete a vulnerability by id
    pub fn delete_vuln(&self, id: i64) -> Result<()> {
        let conn = self.connection()?;
        let changed = conn.execute("DELETE FROM vulnerabilities WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::VulnNotFound(id).into());
        }
        Ok(())
    }

    /// List target ids with their names, for dynamic completion
    pub fn target_labels(&self) -> Result<Vec<(i64, String)>> {
        self.labels("SELECT id, name FROM targets ORDER BY id")
    }

    /// List vulnerability ids with their titles, for dynamic completion
    pub fn vuln_labels(&self) -> Result<Vec<(i64, String)>> {
        self.labels("SELECT id, title FROM vulnerabilities ORDER BY id")
    }

    fn labels(&self, sql: &str) -> Result<Vec<(i64, String)>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut labels = Vec::new();
        for row in rows {
            labels.push(row?);
        }
        Ok(labels)
    }
}
