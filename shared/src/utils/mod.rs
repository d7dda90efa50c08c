//! Utility functions and helpers

pub mod units;

pub use units::{format_percent, format_secs, period_millis, value_to_secs};
