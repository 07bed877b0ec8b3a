//! `snapdiff report <input>` – build the screenshot comparison report.

use anyhow::{Context, Result};
use snapdiff_core::config::SnapdiffConfig;
use snapdiff_core::report;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Reads record lines from `input`, or stdin when it is `-`.
fn read_lines(input: &str) -> Result<Vec<String>> {
    if input == "-" {
        return io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read records from stdin");
    }
    let data = fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?;
    Ok(data.lines().map(str::to_string).collect())
}

pub fn run_report(cfg: &SnapdiffConfig, input: &str, output: Option<PathBuf>) -> Result<()> {
    let mut report_cfg = cfg.report.clone();
    if let Some(path) = output {
        report_cfg.output_path = path;
    }

    let lines = read_lines(input)?;
    let outcome = report::build_report(&lines, &report_cfg)?;

    for skip in &outcome.skipped {
        eprintln!("Skipping invalid record at index {}: {} ({})", skip.index, skip.line, skip.reason);
    }
    println!(
        "Report generated: {} ({} compared, {} skipped)",
        outcome.report_path.display(),
        outcome.compared,
        outcome.skipped.len()
    );
    Ok(())
}
