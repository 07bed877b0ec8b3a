//! `snapdiff fetch-raw <url> <path>` – save a file's bytes unchanged.

use anyhow::Result;
use snapdiff_core::config::SnapdiffConfig;
use snapdiff_core::download;
use std::path::Path;

use super::fetch::{fetch_options, persist_config};

pub fn run_fetch_raw(
    cfg: &SnapdiffConfig,
    url: &str,
    path: &Path,
    no_timestamp: bool,
    timeout: Option<u64>,
) -> Result<()> {
    let opts = fetch_options(cfg, timeout);
    let persist_cfg = persist_config(cfg, no_timestamp, None);
    let persisted = download::download_raw_and_save(url, path, &opts, &persist_cfg)?;
    println!(
        "Downloaded {} bytes to {}",
        persisted.bytes_written,
        persisted.path.display()
    );
    Ok(())
}
