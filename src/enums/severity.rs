use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Severity {
    #[serde(rename = "critical")]
    Critical,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

impl Severity {
    /// Unrecognized severity strings fall back to `Low`.
    pub fn parse(value: &str) -> Self {
        match value {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Read the severity of a finding object. Findings are free-form JSON;
    /// a missing or non-string `severity` key counts as `Low`.
    pub fn of_finding(finding: &Value) -> Self {
        finding
            .get("severity")
            .and_then(Value::as_str)
            .map(Self::parse)
            .unwrap_or(Severity::Low)
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Low
    }
}
