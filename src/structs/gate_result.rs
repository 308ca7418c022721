use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;

/// Averaged scores, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateScores {
    pub risk: f64,
    pub security: f64,
    pub quality: f64,
}

/// Severity histogram over all aggregated findings.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }
}

/// The gate decision for a repository branch. Recomputed on every request,
/// never persisted. Field names are part of the CI integration contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateResult {
    pub passed: bool,
    pub reason: Option<String>,
    pub scores: GateScores,
    pub findings: SeverityCounts,
    pub file_count: usize,
}
