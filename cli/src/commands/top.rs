//! Top command implementation

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hotspot_analyzer::config::DEFAULT_MAX_ENTRIES;
use hotspot_analyzer::{hotspot_report, AnalyzerConfig, ProfileDecoder};
use hotspot_shared::types::report::HotspotReport;
use hotspot_shared::utils::{format_percent, format_secs};
use tracing::info;

use crate::output;

#[derive(Args, Debug)]
pub struct TopArgs {
    /// gzip-compressed pprof file
    pub file: PathBuf,

    /// Number of functions to show
    #[arg(short = 'n', long, env = "HOTSPOT_TOP", default_value_t = DEFAULT_MAX_ENTRIES)]
    pub top: usize,

    /// Also write the report in JSON format
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: TopArgs) -> Result<()> {
    let config = AnalyzerConfig::default().with_max_entries(args.top);
    config.validate()?;

    let profile = ProfileDecoder::new(&config)
        .decode_file(&args.file)
        .context("Error reading profile")?;

    let report = hotspot_report(&profile, config.max_entries);

    output::print_lines(&output::summary_lines(&profile));
    println!();
    output::print_lines(&table_lines(&report, config.max_entries));

    if let Some(path) = &args.json {
        write_json(&report, path)?;
        output::success(&format!("JSON report written to {}", path.display()));
    }

    Ok(())
}

fn row(cells: [&str; 6]) -> String {
    format!(
        "{:<8} {:<7} {:<7} {:<8} {:<7}  {}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}

/// Fixed-width hotspot table, header included
pub fn table_lines(report: &HotspotReport, max_entries: usize) -> Vec<String> {
    let title = format!("Top {} Hotspots:", max_entries);
    let mut lines = vec![
        title.clone(),
        "-".repeat(title.len() - 1),
        row(["flat", "flat%", "sum%", "cum", "cum%", "Stack Trace"]),
        row([
            "--------",
            "-------",
            "-------",
            "--------",
            "-------",
            "----------",
        ]),
    ];

    for r in &report.rows {
        let flat = format_secs(r.flat_secs(report.period_ns));
        let flat_pct = format_percent(r.flat_percent);
        let sum_pct = format_percent(r.cumulative_flat_percent);
        let cum = format_secs(r.cumulative_secs(report.period_ns));
        let cum_pct = format_percent(r.cum_percent);
        lines.push(row([&flat, &flat_pct, &sum_pct, &cum, &cum_pct, &r.function]));
    }

    lines
}

/// Write the report as pretty-printed JSON
pub fn write_json(report: &HotspotReport, output_path: &Path) -> Result<()> {
    info!("Generating JSON output: {}", output_path.display());

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).context("Failed to serialize report to JSON")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_shared::types::report::RankedFunction;

    fn report() -> HotspotReport {
        HotspotReport::from_ranked(
            vec![
                RankedFunction::new("main.f", 5, 5),
                RankedFunction::new("main.g", 3, 8),
            ],
            10_000_000,
        )
    }

    #[test]
    fn test_table_header() {
        let lines = table_lines(&report(), 10);
        assert_eq!(lines[0], "Top 10 Hotspots:");
        assert_eq!(lines[1], "---------------");
        assert_eq!(
            lines[2],
            "flat     flat%   sum%    cum      cum%     Stack Trace"
        );
    }

    #[test]
    fn test_table_rows() {
        let lines = table_lines(&report(), 2);
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[4],
            "0.05s    62.50%  62.50%  0.05s    62.50%   main.f"
        );
        assert_eq!(
            lines[5],
            "0.03s    37.50%  100.00% 0.08s    100.00%  main.g"
        );
    }

    #[test]
    fn test_empty_report_has_only_header() {
        let empty = HotspotReport::from_ranked(vec![], 10_000_000);
        assert_eq!(table_lines(&empty, 0).len(), 4);
    }

    #[test]
    fn test_write_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("report.json");

        write_json(&report(), &output_path).unwrap();

        let contents = std::fs::read_to_string(&output_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["total_flat"], 8);
        assert_eq!(parsed["rows"][1]["function"], "main.g");
    }
}
