//! Visual diff report: record parsing, the per-record driving loop and HTML assembly.

pub mod batch;
pub mod html;
pub mod record;

pub use batch::{build_report, BatchOutcome, SkippedRecord};
pub use html::{assemble, render};
pub use record::{ComparisonRecord, RecordError};

use crate::config::ReportConfig;
use std::path::PathBuf;

/// `<original_dir>/<shot id>.<ext>`
pub fn original_screenshot(cfg: &ReportConfig, record: &ComparisonRecord) -> PathBuf {
    cfg.original_dir
        .join(format!("{}.{}", record.origin_shot_id, cfg.image_extension))
}

/// `<target_dir>/<shot id>.<ext>`
pub fn target_screenshot(cfg: &ReportConfig, record: &ComparisonRecord) -> PathBuf {
    cfg.target_dir
        .join(format!("{}.{}", record.target_shot_id, cfg.image_extension))
}
