//! Subcommand implementations

pub mod info;
pub mod top;
