use crate::structs::gate_result::GateResult;

/// The three public badge states. `Unknown` (no analyses) is distinct from
/// `Failed` (evaluated and rejected).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BadgeStatus {
    Passed,
    Failed,
    Unknown,
}

impl BadgeStatus {
    pub fn from_gate(result: &GateResult) -> Self {
        if result.file_count == 0 {
            BadgeStatus::Unknown
        } else if result.passed {
            BadgeStatus::Passed
        } else {
            BadgeStatus::Failed
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            BadgeStatus::Passed => "PASS",
            BadgeStatus::Failed => "FAIL",
            BadgeStatus::Unknown => "N/A",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BadgeStatus::Passed => "#4c1",
            BadgeStatus::Failed => "#e05d44",
            BadgeStatus::Unknown => "#9f9f9f",
        }
    }
}
