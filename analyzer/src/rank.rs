//! Ranking and report construction

use hotspot_shared::types::report::{HotspotReport, RankedFunction};

use crate::attribute::Attribution;

/// Order functions by flat value and keep the first `max_entries`.
///
/// Ties on flat are broken by function name, ascending, so the output is
/// fully deterministic.
pub fn rank(attribution: &Attribution, max_entries: usize) -> Vec<RankedFunction> {
    let mut ranked: Vec<RankedFunction> = attribution
        .iter()
        .map(|(name, totals)| RankedFunction::new(name, totals.flat, totals.cumulative))
        .collect();

    ranked.sort_by(|a, b| b.flat.cmp(&a.flat).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(max_entries);
    ranked
}

/// Rank and compute percentages relative to the returned rows
pub fn report(attribution: &Attribution, max_entries: usize, period_ns: i64) -> HotspotReport {
    HotspotReport::from_ranked(rank(attribution, max_entries), period_ns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::attribute;
    use crate::symbols::SymbolIndex;
    use hotspot_shared::types::profile::{Function, Line, Location, Profile, Sample};

    fn attribution_for(entries: &[(&str, i64)]) -> Attribution {
        // One single-frame sample per entry, so flat == cumulative == value.
        let mut profile = Profile {
            string_table: vec![String::new()],
            ..Default::default()
        };
        for (i, (name, value)) in entries.iter().enumerate() {
            let id = i as u64 + 1;
            profile.string_table.push(name.to_string());
            profile.locations.push(Location {
                id,
                lines: vec![Line { function_id: id, line: 1 }],
                ..Default::default()
            });
            profile.functions.push(Function {
                id,
                name_index: id as i64,
                ..Default::default()
            });
            profile.samples.push(Sample::new(vec![id], vec![*value]));
        }
        let index = SymbolIndex::new(&profile);
        attribute(&profile, &index)
    }

    fn names(ranked: &[RankedFunction]) -> Vec<&str> {
        ranked.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_flat_descending() {
        let attribution = attribution_for(&[("low", 1), ("high", 9), ("mid", 4)]);
        let ranked = rank(&attribution, 10);
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_broken_by_name() {
        let attribution = attribution_for(&[("zeta", 3), ("alpha", 3), ("mu", 3), ("top", 5)]);
        let ranked = rank(&attribution, 10);
        assert_eq!(names(&ranked), vec!["top", "alpha", "mu", "zeta"]);
    }

    #[test]
    fn test_truncation() {
        let attribution = attribution_for(&[("a", 3), ("b", 2), ("c", 1)]);

        assert!(rank(&attribution, 0).is_empty());
        assert_eq!(names(&rank(&attribution, 2)), vec!["a", "b"]);
        assert_eq!(rank(&attribution, 100).len(), 3);
    }

    #[test]
    fn test_zero_entries_report_is_empty() {
        let attribution = attribution_for(&[("a", 3)]);
        let report = report(&attribution, 0, 10_000_000);
        assert!(report.is_empty());
        assert_eq!(report.total_flat, 0);
    }

    #[test]
    fn test_report_denominator_is_top_n_sum() {
        let attribution = attribution_for(&[("a", 6), ("b", 2), ("c", 2)]);
        let report = report(&attribution, 2, 1);

        // a and b kept; c's flat is excluded from the denominator.
        assert_eq!(report.total_flat, 8);
        assert!((report.rows[0].flat_percent - 75.0).abs() < 1e-9);
        assert!((report.rows[1].cumulative_flat_percent - 100.0).abs() < 1e-9);
    }
}
