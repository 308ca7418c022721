use crate::enums::severity::Severity;
use crate::structs::aggregate::Aggregate;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::gate_result::SeverityCounts;

/// Reduce a window of analysis records into mean scores and a severity
/// histogram. Pure and commutative: record order never changes the result.
/// An empty window yields zero averages; the evaluator decides what that
/// means.
pub fn aggregate(records: &[AnalysisRecord]) -> Aggregate {
    let mut total_risk = 0.0;
    let mut total_security = 0.0;
    let mut total_quality = 0.0;
    let mut counts = SeverityCounts::default();

    for record in records {
        total_risk += record.score("risk");
        total_security += record.score("security");
        total_quality += record.score("quality");

        for finding in &record.findings {
            counts.bump(Severity::of_finding(finding));
        }
    }

    let count = records.len();
    let divisor = if count > 0 { count as f64 } else { 1.0 };

    Aggregate {
        avg_risk: total_risk / divisor,
        avg_security: total_security / divisor,
        avg_quality: total_quality / divisor,
        counts,
        count,
    }
}
