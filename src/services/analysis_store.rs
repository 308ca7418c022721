use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use serde_json::Value;
use uuid::Uuid;
use crate::errors::{QaFlowError, QaFlowResult};
use crate::structs::analysis_record::AnalysisRecord;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS analyses (
    id            TEXT PRIMARY KEY,
    project_id    TEXT,
    user_id       TEXT NOT NULL,
    filename      TEXT,
    language      TEXT NOT NULL,
    code          TEXT NOT NULL,
    scores        TEXT NOT NULL,
    findings      TEXT NOT NULL,
    passed        INTEGER NOT NULL,
    commit_hash   TEXT,
    branch        TEXT,
    repository_id TEXT,
    metadata      TEXT NOT NULL,
    timestamp     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_analyses_repo_branch
    ON analyses (repository_id, branch);
CREATE TABLE IF NOT EXISTS api_tokens (
    token      TEXT PRIMARY KEY,
    user_id    TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

const RECORD_COLUMNS: &str = "id, project_id, user_id, filename, language, code, \
     scores, findings, passed, commit_hash, branch, repository_id, metadata, timestamp";

/// Durable table of analysis results. Writes are serialized through a single
/// connection; reads go through the same connection since SQLite local reads
/// are fast and every request fetches a bounded window.
pub struct AnalysisStore {
    conn: Mutex<Connection>,
}

impl AnalysisStore {
    pub fn open(path: &Path) -> QaFlowResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| QaFlowError::storage_error("open database", &e.to_string()))?;
        Self::init(conn)
    }

    /// In-memory database, for tests.
    pub fn open_in_memory() -> QaFlowResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| QaFlowError::storage_error("open database", &e.to_string()))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> QaFlowResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| QaFlowError::storage_error("create schema", &e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, operation: &str, f: F) -> QaFlowResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| QaFlowError::storage_error(operation, "connection lock poisoned"))?;
        f(&guard).map_err(|e| QaFlowError::storage_error(operation, &e.to_string()))
    }

    pub fn insert_record(&self, record: &AnalysisRecord) -> QaFlowResult<()> {
        let scores = serde_json::to_string(&record.scores)?;
        let findings = serde_json::to_string(&record.findings)?;
        let metadata = serde_json::to_string(&record.metadata)?;

        self.with_conn("insert analysis", |conn| {
            conn.execute(
                "INSERT INTO analyses (id, project_id, user_id, filename, language, code, \
                 scores, findings, passed, commit_hash, branch, repository_id, metadata, timestamp) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                params![
                    record.id,
                    record.project_id,
                    record.user_id,
                    record.filename,
                    record.language,
                    record.code,
                    scores,
                    findings,
                    record.passed,
                    record.commit_hash,
                    record.branch,
                    record.repository_id,
                    metadata,
                    record.timestamp.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }

    /// The aggregation window: newest first, ties on timestamp broken by
    /// insertion order. Exact match on the repository id column — no
    /// substring matching against the metadata blob, so repository ids that
    /// prefix one another never collide. An empty result is not an error.
    pub fn fetch_records(
        &self,
        repository_id: &str,
        branch: &str,
        limit: usize,
    ) -> QaFlowResult<Vec<AnalysisRecord>> {
        self.with_conn("fetch analyses", |conn| {
            let mut stmt = conn.prepare_cached(&format!(
                "SELECT {RECORD_COLUMNS} FROM analyses \
                 WHERE repository_id = ?1 AND branch = ?2 \
                 ORDER BY timestamp DESC, rowid DESC LIMIT ?3"
            ))?;
            let rows = stmt.query_map(params![repository_id, branch, limit as i64], map_record)?;
            rows.collect()
        })
    }

    /// Submission history for one user, newest first.
    pub fn list_records(
        &self,
        user_id: &str,
        project_id: Option<&str>,
        limit: usize,
    ) -> QaFlowResult<Vec<AnalysisRecord>> {
        self.with_conn("list analyses", |conn| {
            match project_id {
                Some(project) => {
                    let mut stmt = conn.prepare_cached(&format!(
                        "SELECT {RECORD_COLUMNS} FROM analyses \
                         WHERE user_id = ?1 AND project_id = ?2 \
                         ORDER BY timestamp DESC, rowid DESC LIMIT ?3"
                    ))?;
                    let rows = stmt.query_map(params![user_id, project, limit as i64], map_record)?;
                    rows.collect()
                }
                None => {
                    let mut stmt = conn.prepare_cached(&format!(
                        "SELECT {RECORD_COLUMNS} FROM analyses \
                         WHERE user_id = ?1 \
                         ORDER BY timestamp DESC, rowid DESC LIMIT ?2"
                    ))?;
                    let rows = stmt.query_map(params![user_id, limit as i64], map_record)?;
                    rows.collect()
                }
            }
        })
    }

    /// Mint an opaque bearer token for a user. Tokens are operator-issued;
    /// there is no registration flow in this service.
    pub fn insert_token(&self, user_id: &str) -> QaFlowResult<String> {
        let token = Uuid::new_v4().simple().to_string();
        let created_at = Utc::now().to_rfc3339();

        self.with_conn("insert token", |conn| {
            conn.execute(
                "INSERT INTO api_tokens (token, user_id, created_at) VALUES (?1, ?2, ?3)",
                params![token, user_id, created_at],
            )?;
            Ok(())
        })?;

        Ok(token)
    }

    pub fn resolve_token(&self, token: &str) -> QaFlowResult<Option<String>> {
        self.with_conn("resolve token", |conn| {
            let mut stmt =
                conn.prepare_cached("SELECT user_id FROM api_tokens WHERE token = ?1")?;
            let mut rows = stmt.query_map(params![token], |row| row.get::<_, String>(0))?;
            rows.next().transpose()
        })
    }
}

/// Row → record mapping with defensive defaults: a malformed scores or
/// findings blob degrades to empty rather than failing the whole window,
/// so one bad row cannot poison an aggregation.
fn map_record(row: &Row<'_>) -> rusqlite::Result<AnalysisRecord> {
    let scores_json: String = row.get(6)?;
    let findings_json: String = row.get(7)?;
    let metadata_json: String = row.get(12)?;
    let timestamp_raw: String = row.get(13)?;

    let scores: HashMap<String, f64> =
        serde_json::from_str(&scores_json).unwrap_or_default();
    let findings: Vec<Value> = serde_json::from_str(&findings_json).unwrap_or_default();
    let metadata: HashMap<String, Value> =
        serde_json::from_str(&metadata_json).unwrap_or_default();
    let timestamp = DateTime::parse_from_rfc3339(&timestamp_raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    Ok(AnalysisRecord {
        id: row.get(0)?,
        project_id: row.get(1)?,
        user_id: row.get(2)?,
        filename: row.get(3)?,
        language: row.get(4)?,
        code: row.get(5)?,
        scores,
        findings,
        passed: row.get(8)?,
        commit_hash: row.get(9)?,
        branch: row.get(10)?,
        repository_id: row.get(11)?,
        metadata,
        timestamp,
    })
}
