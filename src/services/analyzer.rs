use std::collections::HashMap;
use serde_json::Value;
use crate::errors::QaFlowResult;

/// Scores and findings produced for one submitted file.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerOutcome {
    pub scores: HashMap<String, f64>,
    pub findings: Vec<Value>,
}

/// The analysis seam. The gate engine only consumes `{scores, findings}`
/// records, so a real scanner can replace the mock without touching the
/// evaluator.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, language: &str, code: &str) -> QaFlowResult<AnalyzerOutcome>;
}

/// Placeholder analyzer: fixed scores regardless of the submitted code.
pub struct MockAnalyzer;

impl Analyzer for MockAnalyzer {
    fn analyze(&self, language: &str, _code: &str) -> QaFlowResult<AnalyzerOutcome> {
        log::debug!("🔍 Mock analysis for language '{}'", language);

        let mut scores = HashMap::new();
        scores.insert("risk".to_string(), 75.0);
        scores.insert("quality".to_string(), 80.0);
        scores.insert("security".to_string(), 70.0);
        scores.insert("improvements".to_string(), 5.0);

        Ok(AnalyzerOutcome {
            scores,
            findings: Vec::new(),
        })
    }
}
