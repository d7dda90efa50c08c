//! Hotspot report types and percentage computation
//!
//! A report is built from rows that are already ranked and truncated. All
//! percentages are relative to the flat sum of the rows in the report, not
//! to the whole profile.

use serde::{Deserialize, Serialize};

use crate::utils::units::value_to_secs;

/// A function with its accumulated flat and cumulative values
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankedFunction {
    /// Resolved function name; the aggregation key
    pub name: String,
    pub flat: i64,
    pub cumulative: i64,
}

impl RankedFunction {
    pub fn new(name: impl Into<String>, flat: i64, cumulative: i64) -> Self {
        Self {
            name: name.into(),
            flat,
            cumulative,
        }
    }
}

/// One rendering-ready line of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotRow {
    pub function: String,
    pub flat: i64,
    pub cumulative: i64,
    /// flat * 100 / total_flat
    pub flat_percent: f64,
    /// Running sum of `flat_percent` up to and including this row
    pub cumulative_flat_percent: f64,
    /// cumulative * 100 / total_flat
    pub cum_percent: f64,
}

impl HotspotRow {
    /// Flat value converted to seconds using the sampling period
    pub fn flat_secs(&self, period_ns: i64) -> f64 {
        value_to_secs(self.flat, period_ns)
    }

    /// Cumulative value converted to seconds using the sampling period
    pub fn cumulative_secs(&self, period_ns: i64) -> f64 {
        value_to_secs(self.cumulative, period_ns)
    }
}

/// Ordered hotspot rows plus the totals they were computed against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotReport {
    /// Sampling period of the source profile
    pub period_ns: i64,

    /// Sum of flat over `rows` (the percentage denominator)
    pub total_flat: i64,

    pub rows: Vec<HotspotRow>,
}

impl HotspotReport {
    /// Compute percentages for already-ranked rows.
    ///
    /// When the flat total is zero every percentage is zero.
    pub fn from_ranked(ranked: Vec<RankedFunction>, period_ns: i64) -> Self {
        let total_flat = ranked
            .iter()
            .fold(0i64, |acc, r| acc.wrapping_add(r.flat));

        let percent_of = |value: i64| {
            if total_flat == 0 {
                0.0
            } else {
                value as f64 * 100.0 / total_flat as f64
            }
        };

        let mut running = 0.0;
        let rows = ranked
            .into_iter()
            .map(|r| {
                let flat_percent = percent_of(r.flat);
                running += flat_percent;
                HotspotRow {
                    flat_percent,
                    cumulative_flat_percent: running,
                    cum_percent: percent_of(r.cumulative),
                    function: r.name,
                    flat: r.flat,
                    cumulative: r.cumulative,
                }
            })
            .collect();

        Self {
            period_ns,
            total_flat,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
