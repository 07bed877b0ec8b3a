//! Driving loop: parse each record, diff URLs and screenshots, then assemble the report.
//!
//! Records are processed one at a time. A malformed record is skipped with a
//! diagnostic; a screenshot that cannot be compared still gets a report entry.

use super::{assemble, original_screenshot, target_screenshot, ComparisonRecord, RecordError};
use crate::config::ReportConfig;
use crate::pixel_diff::{self, PixelDiffResult};
use crate::url_diff::{self, UrlDiff};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// An input line that was not turned into a report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position in the input.
    pub index: usize,
    pub line: String,
    pub reason: RecordError,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub report_path: PathBuf,
    /// Number of entries in the report.
    pub compared: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Unique diff image path inside `cfg.diff_dir`.
fn diff_image_path(cfg: &ReportConfig) -> PathBuf {
    cfg.diff_dir.join(format!("diff_{}.png", Uuid::new_v4()))
}

/// Builds the report from comma-delimited record lines. Blank lines are ignored.
pub fn build_report<I, S>(lines: I, cfg: &ReportConfig) -> Result<BatchOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fs::create_dir_all(&cfg.diff_dir)
        .with_context(|| format!("failed to create diff directory {}", cfg.diff_dir.display()))?;

    let mut records: Vec<ComparisonRecord> = Vec::new();
    let mut url_diffs: Vec<UrlDiff> = Vec::new();
    let mut pixel_results: Vec<PixelDiffResult> = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let record: ComparisonRecord = match line.parse() {
            Ok(r) => r,
            Err(reason) => {
                tracing::warn!(index, "skipping invalid record: {} ({})", line, reason);
                skipped.push(SkippedRecord {
                    index,
                    line: line.to_string(),
                    reason,
                });
                continue;
            }
        };

        let url_diff = url_diff::highlight(&record.origin_redirect, &record.target_redirect);
        let pixel = pixel_diff::compare(
            &original_screenshot(cfg, &record),
            &target_screenshot(cfg, &record),
            &diff_image_path(cfg),
            cfg.marker_color,
        );

        records.push(record);
        url_diffs.push(url_diff);
        pixel_results.push(pixel);
    }

    let report_path = assemble(&records, &url_diffs, &pixel_results, cfg)?;
    Ok(BatchOutcome {
        report_path,
        compared: records.len(),
        skipped,
    })
}
