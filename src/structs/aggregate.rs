use crate::structs::gate_result::SeverityCounts;

/// Output of the aggregation fold over a record window. Averages are 0 when
/// the window is empty; the evaluator handles that case explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub avg_risk: f64,
    pub avg_security: f64,
    pub avg_quality: f64,
    pub counts: SeverityCounts,
    pub count: usize,
}
