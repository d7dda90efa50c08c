//! Core data types

pub mod profile;
pub mod report;
