//! `snapdiff fetch <url> <path>` – download, detect JSON vs text, save.

use anyhow::Result;
use snapdiff_core::config::{PersistConfig, SnapdiffConfig};
use snapdiff_core::download;
use snapdiff_core::fetch::{self, FetchOptions, FetchResult};
use std::path::Path;
use std::time::Duration;

/// Overrides taken from the command line.
#[derive(Debug, Default)]
pub struct FetchArgs {
    pub no_timestamp: bool,
    pub indent: Option<usize>,
    pub timeout: Option<u64>,
    pub headers: Vec<String>,
}

pub(crate) fn fetch_options(cfg: &SnapdiffConfig, timeout: Option<u64>) -> FetchOptions {
    let opts = FetchOptions::from_config(&cfg.fetch);
    match timeout {
        Some(secs) => opts.with_timeout(Duration::from_secs(secs)),
        None => opts,
    }
}

pub(crate) fn persist_config(cfg: &SnapdiffConfig, no_timestamp: bool, indent: Option<usize>) -> PersistConfig {
    PersistConfig {
        indent: indent.unwrap_or(cfg.persist.indent),
        add_timestamp: cfg.persist.add_timestamp && !no_timestamp,
        ..cfg.persist.clone()
    }
}

pub fn run_fetch(cfg: &SnapdiffConfig, url: &str, path: &Path, args: FetchArgs) -> Result<()> {
    let mut opts = fetch_options(cfg, args.timeout);
    if !args.headers.is_empty() {
        let headers = args
            .headers
            .iter()
            .map(|h| fetch::parse_header(h))
            .collect::<Result<Vec<_>, _>>()?;
        opts = opts.with_headers(headers);
    }
    let persist_cfg = persist_config(cfg, args.no_timestamp, args.indent);

    let download = download::download_and_save(url, path, &opts, &persist_cfg)?;
    let kind = match download.content {
        FetchResult::Structured(_) => "JSON",
        FetchResult::Text(_) => "text",
    };
    println!(
        "Saved {} ({} bytes) to {}",
        kind,
        download.bytes_written,
        download.path.display()
    );
    Ok(())
}
