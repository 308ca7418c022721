use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::analysis_record::AnalysisRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub id: String,
    pub project_id: Option<String>,
    pub filename: Option<String>,
    pub language: String,
    pub scores: HashMap<String, f64>,
    pub findings: Vec<Value>,
    pub passed: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<&AnalysisRecord> for AnalysisResponse {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            id: record.id.clone(),
            project_id: record.project_id.clone(),
            filename: record.filename.clone(),
            language: record.language.clone(),
            scores: record.scores.clone(),
            findings: record.findings.clone(),
            passed: record.passed,
            timestamp: record.timestamp,
        }
    }
}
