use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Submission payload for a new analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub project_id: Option<String>,
    pub filename: Option<String>,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub commit_hash: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub repository_id: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl AnalysisRequest {
    /// The repository a record belongs to: the explicit field wins, otherwise
    /// the `repositoryId` key that CI integrations embed in the metadata map.
    pub fn resolved_repository_id(&self) -> Option<String> {
        self.repository_id.clone().or_else(|| {
            self.metadata
                .get("repositoryId")
                .and_then(Value::as_str)
                .map(|s| s.to_string())
        })
    }
}
