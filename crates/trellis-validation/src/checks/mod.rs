pub mod executability;
pub mod semantic;
pub mod structural;

/// Parameter key carrying the time expression.
pub const TIME_KEY: &str = "TIME";
/// Parameter key carrying the business metric.
pub const METRIC_KEY: &str = "METRIC";
