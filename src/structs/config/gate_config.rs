use serde::{Deserialize, Serialize};
use crate::config::constants::{
    DEFAULT_FETCH_LIMIT, DEFAULT_MAX_CRITICAL, DEFAULT_MAX_HIGH,
    DEFAULT_MIN_RISK, DEFAULT_MIN_SECURITY,
};

/// Gate thresholds. Minimums use strict `<` to fail (a score exactly at the
/// minimum passes); maximums use strict `>` (a count exactly at the maximum
/// passes).
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct GateConfig {
    #[serde(default = "GateConfig::default_min_risk")]
    pub min_risk: f64,

    #[serde(default = "GateConfig::default_min_security")]
    pub min_security: f64,

    #[serde(default = "GateConfig::default_max_critical")]
    pub max_critical: usize,

    #[serde(default = "GateConfig::default_max_high")]
    pub max_high: usize,

    /// How many of the most recent records feed the aggregation window.
    #[serde(default = "GateConfig::default_fetch_limit")]
    pub fetch_limit: usize,
}

impl GateConfig {
    fn default_min_risk() -> f64 {
        DEFAULT_MIN_RISK
    }

    fn default_min_security() -> f64 {
        DEFAULT_MIN_SECURITY
    }

    fn default_max_critical() -> usize {
        DEFAULT_MAX_CRITICAL
    }

    fn default_max_high() -> usize {
        DEFAULT_MAX_HIGH
    }

    fn default_fetch_limit() -> usize {
        DEFAULT_FETCH_LIMIT
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_risk: Self::default_min_risk(),
            min_security: Self::default_min_security(),
            max_critical: Self::default_max_critical(),
            max_high: Self::default_max_high(),
            fetch_limit: Self::default_fetch_limit(),
        }
    }
}
