use std::collections::HashMap;
use crate::structs::aggregate::Aggregate;
use crate::structs::config::gate_config::GateConfig;
use crate::structs::gate_result::{GateResult, GateScores, SeverityCounts};

pub const NO_ANALYSES_REASON: &str = "no analyses found";

/// Applies the gate thresholds to an aggregation result. Pure function of its
/// input; "no data" and "threshold violated" are both ordinary results, never
/// errors.
pub struct GateEvaluator {
    config: GateConfig,
}

impl GateEvaluator {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Checks run in a fixed order and stop at the first violation:
    /// risk minimum, security minimum, critical maximum, high maximum.
    /// That precedence is part of the gate contract.
    pub fn evaluate(&self, aggregate: &Aggregate) -> GateResult {
        if aggregate.count == 0 {
            return GateResult {
                passed: false,
                reason: Some(NO_ANALYSES_REASON.to_string()),
                scores: GateScores { risk: 0.0, security: 0.0, quality: 0.0 },
                findings: SeverityCounts::default(),
                file_count: 0,
            };
        }

        let reason = if aggregate.avg_risk < self.config.min_risk {
            Some(format!(
                "Risk score too low: {:.1}% (minimum: {}%)",
                aggregate.avg_risk, self.config.min_risk
            ))
        } else if aggregate.avg_security < self.config.min_security {
            Some(format!(
                "Security score too low: {:.1}% (minimum: {}%)",
                aggregate.avg_security, self.config.min_security
            ))
        } else if aggregate.counts.critical > self.config.max_critical {
            Some(format!(
                "Critical findings found: {} (maximum: {})",
                aggregate.counts.critical, self.config.max_critical
            ))
        } else if aggregate.counts.high > self.config.max_high {
            Some(format!(
                "Too many high findings: {} (maximum: {})",
                aggregate.counts.high, self.config.max_high
            ))
        } else {
            None
        };

        GateResult {
            passed: reason.is_none(),
            reason,
            scores: GateScores {
                risk: round_one_decimal(aggregate.avg_risk),
                security: round_one_decimal(aggregate.avg_security),
                quality: round_one_decimal(aggregate.avg_quality),
            },
            findings: aggregate.counts,
            file_count: aggregate.count,
        }
    }

    /// The single-record verdict stored with each submission. Local to that
    /// record; never a substitute for the aggregate gate.
    pub fn record_passes(&self, scores: &HashMap<String, f64>) -> bool {
        let risk = scores.get("risk").copied().unwrap_or(0.0);
        let security = scores.get("security").copied().unwrap_or(0.0);
        risk >= self.config.min_risk && security >= self.config.min_security
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
