//! Wire messages for the pprof `perftools.profiles` schema
//!
//! Field tags follow `profile.proto` from the pprof project. Fields are
//! only ever read; unknown tags are skipped by prost, so newer producers
//! decode without changes here.

use hotspot_shared::types::profile as model;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Profile {
    #[prost(message, repeated, tag = "1")]
    pub sample_type: Vec<ValueType>,
    #[prost(message, repeated, tag = "2")]
    pub sample: Vec<Sample>,
    #[prost(message, repeated, tag = "3")]
    pub mapping: Vec<Mapping>,
    #[prost(message, repeated, tag = "4")]
    pub location: Vec<Location>,
    #[prost(message, repeated, tag = "5")]
    pub function: Vec<Function>,
    /// `string_table[0]` is always "" in well-formed profiles
    #[prost(string, repeated, tag = "6")]
    pub string_table: Vec<String>,
    #[prost(int64, tag = "7")]
    pub drop_frames: i64,
    #[prost(int64, tag = "8")]
    pub keep_frames: i64,
    #[prost(int64, tag = "9")]
    pub time_nanos: i64,
    #[prost(int64, tag = "10")]
    pub duration_nanos: i64,
    #[prost(message, optional, tag = "11")]
    pub period_type: Option<ValueType>,
    #[prost(int64, tag = "12")]
    pub period: i64,
    #[prost(int64, repeated, tag = "13")]
    pub comment: Vec<i64>,
    #[prost(int64, tag = "14")]
    pub default_sample_type: i64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ValueType {
    #[prost(int64, tag = "1")]
    pub r#type: i64,
    #[prost(int64, tag = "2")]
    pub unit: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Sample {
    /// Leaf is at `location_id[0]`
    #[prost(uint64, repeated, tag = "1")]
    pub location_id: Vec<u64>,
    #[prost(int64, repeated, tag = "2")]
    pub value: Vec<i64>,
    #[prost(message, repeated, tag = "3")]
    pub label: Vec<Label>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Label {
    #[prost(int64, tag = "1")]
    pub key: i64,
    #[prost(int64, tag = "2")]
    pub str: i64,
    #[prost(int64, tag = "3")]
    pub num: i64,
    #[prost(int64, tag = "4")]
    pub num_unit: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Mapping {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub memory_start: u64,
    #[prost(uint64, tag = "3")]
    pub memory_limit: u64,
    #[prost(uint64, tag = "4")]
    pub file_offset: u64,
    #[prost(int64, tag = "5")]
    pub filename: i64,
    #[prost(int64, tag = "6")]
    pub build_id: i64,
    #[prost(bool, tag = "7")]
    pub has_functions: bool,
    #[prost(bool, tag = "8")]
    pub has_filenames: bool,
    #[prost(bool, tag = "9")]
    pub has_line_numbers: bool,
    #[prost(bool, tag = "10")]
    pub has_inline_frames: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub mapping_id: u64,
    #[prost(uint64, tag = "3")]
    pub address: u64,
    /// Innermost line first when frames were inlined
    #[prost(message, repeated, tag = "4")]
    pub line: Vec<Line>,
    #[prost(bool, tag = "5")]
    pub is_folded: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Line {
    #[prost(uint64, tag = "1")]
    pub function_id: u64,
    #[prost(int64, tag = "2")]
    pub line: i64,
    #[prost(int64, tag = "3")]
    pub column: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Function {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(int64, tag = "2")]
    pub name: i64,
    #[prost(int64, tag = "3")]
    pub system_name: i64,
    #[prost(int64, tag = "4")]
    pub filename: i64,
    #[prost(int64, tag = "5")]
    pub start_line: i64,
}

impl From<ValueType> for model::ValueType {
    fn from(v: ValueType) -> Self {
        Self {
            type_index: v.r#type,
            unit_index: v.unit,
        }
    }
}

impl From<Label> for model::Label {
    fn from(l: Label) -> Self {
        Self {
            key_index: l.key,
            str_index: l.str,
            num: l.num,
            num_unit_index: l.num_unit,
        }
    }
}

impl From<Sample> for model::Sample {
    fn from(s: Sample) -> Self {
        Self {
            location_ids: s.location_id,
            values: s.value,
            labels: s.label.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Mapping> for model::Mapping {
    fn from(m: Mapping) -> Self {
        Self {
            id: m.id,
            memory_start: m.memory_start,
            memory_limit: m.memory_limit,
            file_offset: m.file_offset,
            filename_index: m.filename,
            build_id_index: m.build_id,
            has_functions: m.has_functions,
            has_filenames: m.has_filenames,
            has_line_numbers: m.has_line_numbers,
            has_inline_frames: m.has_inline_frames,
        }
    }
}

impl From<Line> for model::Line {
    fn from(l: Line) -> Self {
        Self {
            function_id: l.function_id,
            line: l.line,
        }
    }
}

impl From<Location> for model::Location {
    fn from(l: Location) -> Self {
        Self {
            id: l.id,
            mapping_id: l.mapping_id,
            address: l.address,
            lines: l.line.into_iter().map(Into::into).collect(),
            is_folded: l.is_folded,
        }
    }
}

impl From<Function> for model::Function {
    fn from(f: Function) -> Self {
        Self {
            id: f.id,
            name_index: f.name,
            system_name_index: f.system_name,
            filename_index: f.filename,
            start_line: f.start_line,
        }
    }
}

impl From<Profile> for model::Profile {
    fn from(p: Profile) -> Self {
        Self {
            sample_types: p.sample_type.into_iter().map(Into::into).collect(),
            samples: p.sample.into_iter().map(Into::into).collect(),
            mappings: p.mapping.into_iter().map(Into::into).collect(),
            locations: p.location.into_iter().map(Into::into).collect(),
            functions: p.function.into_iter().map(Into::into).collect(),
            string_table: p.string_table,
            period_type: p.period_type.map(Into::into),
            period: p.period,
            time_nanos: p.time_nanos,
            duration_nanos: p.duration_nanos,
            drop_frames: p.drop_frames,
            keep_frames: p.keep_frames,
            comments: p.comment,
            default_sample_type: p.default_sample_type,
        }
    }
}
