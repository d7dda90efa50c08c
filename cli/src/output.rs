//! Output formatting utilities for CLI commands

use colored::Colorize;
use hotspot_analyzer::{sample_type_descriptions, sampling_period_nanos};
use hotspot_shared::types::profile::Profile;
use hotspot_shared::utils::period_millis;

/// Print success message
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Profile summary and sample type listing
pub fn summary_lines(profile: &Profile) -> Vec<String> {
    let mut lines = vec![
        "Profile Summary:".to_string(),
        "----------------".to_string(),
        format!(
            "Sampling Period: {:.2} ms",
            period_millis(sampling_period_nanos(profile))
        ),
        String::new(),
        "Sample Types:".to_string(),
        "-------------".to_string(),
    ];

    for (name, unit) in sample_type_descriptions(profile) {
        lines.push(format!("- {:<15} (unit: {})", name, unit));
    }

    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
