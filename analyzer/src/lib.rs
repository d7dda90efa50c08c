//! pprof hotspot analyzer library
//!
//! Decodes gzip-compressed pprof profiles and ranks functions by the value
//! they consumed directly (flat) and including their callees (cumulative).
//!
//! The pipeline is decode → [`SymbolIndex`] → [`attribute`] → [`rank`].
//! Each stage takes the previous stage's output by value or reference;
//! there is no shared state between calls.

pub mod attribute;
pub mod config;
pub mod decode;
pub mod error;
pub mod proto;
pub mod rank;
pub mod symbols;

pub use attribute::{attribute, attribute_samples, Attribution, Totals};
pub use config::AnalyzerConfig;
pub use decode::ProfileDecoder;
pub use error::ProfileError;
pub use rank::rank;
pub use symbols::SymbolIndex;

use hotspot_shared::types::profile::Profile;
use hotspot_shared::types::report::{HotspotReport, RankedFunction};
use std::path::Path;

/// Decode a profile file using the default configuration
pub fn decode(path: impl AsRef<Path>) -> Result<Profile, ProfileError> {
    ProfileDecoder::default().decode_file(path)
}

/// Sampling period as recorded by the producer (nanoseconds for CPU profiles)
pub fn sampling_period_nanos(profile: &Profile) -> i64 {
    profile.period
}

/// `(name, unit)` of every declared sample type, in declaration order
pub fn sample_type_descriptions(profile: &Profile) -> Vec<(String, String)> {
    let index = SymbolIndex::new(profile);
    profile
        .sample_types
        .iter()
        .map(|t| {
            (
                index.resolve_string(t.type_index).to_string(),
                index.resolve_string(t.unit_index).to_string(),
            )
        })
        .collect()
}

/// The `max_entries` functions with the highest flat value
pub fn top_hotspots(profile: &Profile, max_entries: usize) -> Vec<RankedFunction> {
    let index = SymbolIndex::new(profile);
    rank(&attribute(profile, &index), max_entries)
}

/// Top hotspots with percentages and running sums
pub fn hotspot_report(profile: &Profile, max_entries: usize) -> HotspotReport {
    let index = SymbolIndex::new(profile);
    rank::report(&attribute(profile, &index), max_entries, profile.period)
}
