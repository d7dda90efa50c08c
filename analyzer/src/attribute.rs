//! Hotspot attribution
//!
//! Walks each sample's stack and accumulates flat and cumulative values per
//! function name. Functions are keyed by their resolved name, so distinct
//! function ids sharing a name end up in the same entry.

use std::collections::{HashMap, HashSet};

use hotspot_shared::types::profile::{Profile, Sample};
use tracing::{debug, trace};

use crate::symbols::SymbolIndex;

/// Accumulated values for one function
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Totals {
    /// Value of samples where the function was the innermost frame
    pub flat: i64,

    /// Value of samples where the function appeared anywhere on the stack,
    /// counted once per sample
    pub cumulative: i64,
}

/// Per-function totals keyed by function name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attribution {
    totals: HashMap<String, Totals>,
}

impl Attribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Totals> {
        self.totals.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Totals)> {
        self.totals.iter().map(|(name, totals)| (name.as_str(), *totals))
    }

    /// Sum of flat over every function
    pub fn total_flat(&self) -> i64 {
        self.totals
            .values()
            .fold(0i64, |acc, t| acc.wrapping_add(t.flat))
    }

    /// Fold another partial attribution into this one.
    ///
    /// Addition is commutative, so samples can be attributed in any
    /// partition and merged afterwards.
    pub fn merge(&mut self, other: Attribution) {
        for (name, totals) in other.totals {
            let entry = self.totals.entry(name).or_default();
            entry.flat = entry.flat.wrapping_add(totals.flat);
            entry.cumulative = entry.cumulative.wrapping_add(totals.cumulative);
        }
    }

    // Sample values are arbitrary int64; totals wrap rather than panic.
    fn add_flat(&mut self, name: &str, value: i64) {
        let entry = self.entry(name);
        entry.flat = entry.flat.wrapping_add(value);
    }

    fn add_cumulative(&mut self, name: &str, value: i64) {
        let entry = self.entry(name);
        entry.cumulative = entry.cumulative.wrapping_add(value);
    }

    fn entry(&mut self, name: &str) -> &mut Totals {
        self.totals.entry(name.to_string()).or_default()
    }
}

/// Attribute every sample in a profile
pub fn attribute(profile: &Profile, index: &SymbolIndex<'_>) -> Attribution {
    let attribution = attribute_samples(&profile.samples, index);
    debug!(
        "Attributed {} samples to {} functions",
        profile.samples.len(),
        attribution.len()
    );
    attribution
}

/// Attribute a subset of samples
pub fn attribute_samples(samples: &[Sample], index: &SymbolIndex<'_>) -> Attribution {
    let mut attribution = Attribution::new();
    let mut credited: HashSet<&str> = HashSet::new();

    for sample in samples {
        let Some(leaf_id) = sample.leaf_location_id() else {
            continue;
        };
        let value = sample.primary_value();

        match index.leaf_function_name(leaf_id) {
            Some(name) => attribution.add_flat(name, value),
            None => trace!("No flat attribution for unresolved leaf location {}", leaf_id),
        }

        // A function recursing N deep is still credited once per sample.
        credited.clear();
        for &location_id in &sample.location_ids {
            match index.leaf_function_name(location_id) {
                Some(name) => {
                    if credited.insert(name) {
                        attribution.add_cumulative(name, value);
                    }
                }
                None => trace!("Skipping unresolved location {} in stack", location_id),
            }
        }
    }

    attribution
}
