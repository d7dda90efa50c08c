//! Symbol index
//!
//! Hash lookups over a decoded profile's tables, built in one pass.
//! Every lookup is tolerant: a dangling id or out-of-range string index
//! resolves to `None` (or `""`), never to an error, so a single bad
//! reference only drops the attribution it belongs to.

use std::collections::HashMap;

use hotspot_shared::types::profile::{Function, Location, Profile};

pub struct SymbolIndex<'a> {
    locations: HashMap<u64, &'a Location>,
    functions: HashMap<u64, &'a Function>,
    strings: &'a [String],
}

impl<'a> SymbolIndex<'a> {
    /// Index a profile's locations, functions and string table.
    ///
    /// When an id occurs more than once the first entry in table order wins.
    pub fn new(profile: &'a Profile) -> Self {
        let mut locations = HashMap::with_capacity(profile.locations.len());
        for location in &profile.locations {
            locations.entry(location.id).or_insert(location);
        }

        let mut functions = HashMap::with_capacity(profile.functions.len());
        for function in &profile.functions {
            functions.entry(function.id).or_insert(function);
        }

        Self {
            locations,
            functions,
            strings: &profile.string_table,
        }
    }

    pub fn location(&self, id: u64) -> Option<&'a Location> {
        self.locations.get(&id).copied()
    }

    pub fn function(&self, id: u64) -> Option<&'a Function> {
        self.functions.get(&id).copied()
    }

    /// String at `index`, or "" when the index is out of range
    pub fn resolve_string(&self, index: i64) -> &'a str {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.strings.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Name of the function at a location's innermost line.
    ///
    /// `None` when the location is unknown, has no lines, or its function
    /// is unknown.
    pub fn leaf_function_name(&self, location_id: u64) -> Option<&'a str> {
        let location = self.location(location_id)?;
        let line = location.leaf_line()?;
        let function = self.function(line.function_id)?;
        Some(self.resolve_string(function.name_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_shared::types::profile::Line;

    fn profile() -> Profile {
        Profile {
            locations: vec![
                Location {
                    id: 10,
                    lines: vec![Line { function_id: 100, line: 1 }],
                    ..Default::default()
                },
                Location {
                    id: 20,
                    ..Default::default()
                },
                Location {
                    id: 30,
                    lines: vec![Line { function_id: 999, line: 1 }],
                    ..Default::default()
                },
                Location {
                    id: 40,
                    lines: vec![Line { function_id: 200, line: 1 }],
                    ..Default::default()
                },
            ],
            functions: vec![
                Function {
                    id: 100,
                    name_index: 1,
                    ..Default::default()
                },
                Function {
                    id: 200,
                    name_index: 42,
                    ..Default::default()
                },
                Function {
                    id: 100,
                    name_index: 2,
                    ..Default::default()
                },
            ],
            string_table: vec![String::new(), "main".to_string(), "shadowed".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let profile = profile();
        let index = SymbolIndex::new(&profile);

        assert_eq!(index.location(10).map(|l| l.id), Some(10));
        assert!(index.location(11).is_none());
        assert_eq!(index.function(200).map(|f| f.name_index), Some(42));
        assert!(index.function(300).is_none());
    }

    #[test]
    fn test_first_duplicate_id_wins() {
        let profile = profile();
        let index = SymbolIndex::new(&profile);
        assert_eq!(index.function(100).map(|f| f.name_index), Some(1));
    }

    #[test]
    fn test_resolve_string_out_of_range() {
        let profile = profile();
        let index = SymbolIndex::new(&profile);

        assert_eq!(index.resolve_string(1), "main");
        assert_eq!(index.resolve_string(0), "");
        assert_eq!(index.resolve_string(3), "");
        assert_eq!(index.resolve_string(-1), "");
        assert_eq!(index.resolve_string(i64::MAX), "");
    }

    #[test]
    fn test_leaf_function_name() {
        let profile = profile();
        let index = SymbolIndex::new(&profile);

        assert_eq!(index.leaf_function_name(10), Some("main"));
        // No lines
        assert_eq!(index.leaf_function_name(20), None);
        // Unknown function
        assert_eq!(index.leaf_function_name(30), None);
        // Unknown location
        assert_eq!(index.leaf_function_name(50), None);
        // Name index out of range resolves to the empty name
        assert_eq!(index.leaf_function_name(40), Some(""));
    }
}
