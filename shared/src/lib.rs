//! Shared types and utilities for Hotspot
//!
//! This crate contains the normalized profile model produced by the decoder,
//! the report types produced by the ranker, and small unit helpers used by
//! the analyzer and the CLI.

pub mod types;
pub mod utils;

// Re-export commonly used types
pub use types::{profile::*, report::*};
