pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_DB_PATH: &str = "qaflow.db";

// Gate thresholds
pub const DEFAULT_MIN_RISK: f64 = 70.0;
pub const DEFAULT_MIN_SECURITY: f64 = 70.0;
pub const DEFAULT_MAX_CRITICAL: usize = 0;
pub const DEFAULT_MAX_HIGH: usize = 5;

// Aggregation window: the most recent records per (repository, branch)
pub const DEFAULT_FETCH_LIMIT: usize = 100;

// Default page size for the submission history endpoint
pub const DEFAULT_LIST_LIMIT: usize = 50;

// Fixed left-segment label on the public badge
pub const BADGE_LABEL: &str = "QA FLOW!";

pub const API_NAME: &str = "QA FLOW! API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
