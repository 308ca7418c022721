use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One persisted analysis result. Immutable after insert; the `passed` flag
/// is the single-record verdict computed at submission time, never the
/// aggregate gate decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub project_id: Option<String>,
    pub user_id: String,
    pub filename: Option<String>,
    pub language: String,
    pub code: String,
    pub scores: HashMap<String, f64>,
    pub findings: Vec<Value>,
    pub passed: bool,
    pub commit_hash: Option<String>,
    pub branch: Option<String>,
    pub repository_id: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Score lookup with the aggregation default: a missing metric counts as 0.
    pub fn score(&self, metric: &str) -> f64 {
        self.scores.get(metric).copied().unwrap_or(0.0)
    }
}
