//! Profile data structures
//!
//! These types are the normalized, in-memory form of a decoded pprof
//! profile. Every textual field is an index into [`Profile::string_table`];
//! ids are profile-scoped and must be looked up, never used as positions.

use serde::{Deserialize, Serialize};

/// Describes what a sample value measures (e.g. `cpu`/`nanoseconds`).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValueType {
    /// String table index of the value name
    pub type_index: i64,

    /// String table index of the unit
    pub unit_index: i64,
}

/// One captured stack plus its measured values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Location ids from innermost (leaf) to outermost
    pub location_ids: Vec<u64>,

    /// One value per declared sample type
    pub values: Vec<i64>,

    /// Free-form context attached by the producer
    pub labels: Vec<Label>,
}

impl Sample {
    /// Create a sample with no labels
    pub fn new(location_ids: Vec<u64>, values: Vec<i64>) -> Self {
        Self {
            location_ids,
            values,
            labels: Vec::new(),
        }
    }

    /// Value of the first declared sample type, or 0 when absent
    pub fn primary_value(&self) -> i64 {
        self.values.first().copied().unwrap_or(0)
    }

    /// Id of the innermost location, if the stack is non-empty
    pub fn leaf_location_id(&self) -> Option<u64> {
        self.location_ids.first().copied()
    }
}

/// Key/value context on a sample
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub key_index: i64,
    pub str_index: i64,
    pub num: i64,
    pub num_unit_index: i64,
}

/// Binary or shared-library mapping
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub id: u64,
    pub memory_start: u64,
    pub memory_limit: u64,
    pub file_offset: u64,
    pub filename_index: i64,
    pub build_id_index: i64,
    pub has_functions: bool,
    pub has_filenames: bool,
    pub has_line_numbers: bool,
    pub has_inline_frames: bool,
}

/// A source line attached to a location
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Id of the function this line belongs to
    pub function_id: u64,

    /// Line number in the function's source file
    pub line: i64,
}

/// An instruction address and the source lines it maps to
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub mapping_id: u64,
    pub address: u64,

    /// Lines for this address; more than one entry means inlined frames,
    /// with the innermost first
    pub lines: Vec<Line>,

    pub is_folded: bool,
}

impl Location {
    /// Innermost line of this location.
    ///
    /// Only this line takes part in attribution; inlined frames after it
    /// are ignored.
    pub fn leaf_line(&self) -> Option<&Line> {
        self.lines.first()
    }
}

/// A function referenced by location lines
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub id: u64,
    pub name_index: i64,
    pub system_name_index: i64,
    pub filename_index: i64,
    pub start_line: i64,
}

/// A decoded profile.
///
/// Built once by the decoder and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// What each entry of `Sample::values` measures
    pub sample_types: Vec<ValueType>,

    pub samples: Vec<Sample>,
    pub mappings: Vec<Mapping>,
    pub locations: Vec<Location>,
    pub functions: Vec<Function>,

    /// De-duplicated string pool; index 0 is conventionally ""
    pub string_table: Vec<String>,

    /// Kind of events between sampled occurrences
    pub period_type: Option<ValueType>,

    /// Number of events between sampled occurrences (nanoseconds for CPU profiles)
    pub period: i64,

    pub time_nanos: i64,
    pub duration_nanos: i64,
    pub drop_frames: i64,
    pub keep_frames: i64,
    pub comments: Vec<i64>,
    pub default_sample_type: i64,
}

impl Profile {
    /// Total number of samples in the profile
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
