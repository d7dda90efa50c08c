//! Unit conversion for presentation
//!
//! Sample values are counts of sampling periods; multiplying by the period
//! gives nanoseconds for CPU profiles.

const NANOS_PER_SEC: f64 = 1_000_000_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Convert a sample value to seconds using the sampling period in nanoseconds
pub fn value_to_secs(value: i64, period_ns: i64) -> f64 {
    value as f64 * period_ns as f64 / NANOS_PER_SEC
}

/// Sampling period in milliseconds
pub fn period_millis(period_ns: i64) -> f64 {
    period_ns as f64 / NANOS_PER_MILLI
}

/// Format seconds with two decimals, e.g. `1.25s`
pub fn format_secs(secs: f64) -> String {
    format!("{:.2}s", secs)
}

/// Format a percentage with two decimals, e.g. `62.50%`
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}
