//! Info command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hotspot_analyzer::{AnalyzerConfig, ProfileDecoder};
use hotspot_shared::types::profile::Profile;

use crate::output;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// gzip-compressed pprof file
    pub file: PathBuf,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let config = AnalyzerConfig::default();
    config.validate()?;

    let profile = ProfileDecoder::new(&config)
        .decode_file(&args.file)
        .context("Error reading profile")?;

    output::print_lines(&output::summary_lines(&profile));
    println!();
    output::print_lines(&table_size_lines(&profile));

    Ok(())
}

fn table_size_lines(profile: &Profile) -> Vec<String> {
    vec![
        "Tables:".to_string(),
        "-------".to_string(),
        format!("{:<10} {}", "samples", profile.samples.len()),
        format!("{:<10} {}", "locations", profile.locations.len()),
        format!("{:<10} {}", "functions", profile.functions.len()),
        format!("{:<10} {}", "mappings", profile.mappings.len()),
        format!("{:<10} {}", "strings", profile.string_table.len()),
    ]
}
