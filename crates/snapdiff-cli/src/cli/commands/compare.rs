//! `snapdiff compare <original> <target> <diff>` – pixel diff of two screenshots.

use anyhow::Result;
use snapdiff_core::config::SnapdiffConfig;
use snapdiff_core::pixel_diff;
use std::path::Path;

pub fn run_compare(cfg: &SnapdiffConfig, original: &Path, target: &Path, diff: &Path) -> Result<()> {
    let result = pixel_diff::compare(original, target, diff, cfg.report.marker_color)?;
    if result.identical {
        println!("Identical; diff image written to {}", result.diff_image.display());
    } else {
        println!(
            "{} pixels differ; diff image written to {}",
            result.differing_pixels,
            result.diff_image.display()
        );
    }
    Ok(())
}
