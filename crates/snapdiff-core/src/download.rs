//! Fetch, name and persist in one call.
//!
//! Each function is all-or-nothing: when the fetch fails nothing is written.

use crate::config::PersistConfig;
use crate::fetch::{self, FetchError, FetchOptions, FetchResult};
use crate::naming;
use crate::persist::{self, PersistError};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("{url} returned text content, not JSON")]
    NotStructured { url: String },
}

/// Content that was downloaded and where it ended up.
#[derive(Debug, Clone)]
pub struct Download {
    pub content: FetchResult,
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Downloads `url`, detects JSON vs text and saves it under `requested` (timestamped if configured).
pub fn download_and_save(
    url: &str,
    requested: &Path,
    fetch_opts: &FetchOptions,
    cfg: &PersistConfig,
) -> Result<Download, DownloadError> {
    let content = fetch::fetch(url, fetch_opts)?;
    let path = naming::derive_path(requested, cfg.add_timestamp);
    let persisted = persist::persist(&content, &path, cfg)?;
    Ok(Download {
        content,
        path: persisted.path,
        bytes_written: persisted.bytes_written,
    })
}

/// Like [`download_and_save`] but fails with [`DownloadError::NotStructured`] for text content.
/// The file is still written before the check.
pub fn download_and_save_json(
    url: &str,
    requested: &Path,
    fetch_opts: &FetchOptions,
    cfg: &PersistConfig,
) -> Result<Download, DownloadError> {
    let download = download_and_save(url, requested, fetch_opts, cfg)?;
    if !download.content.is_structured() {
        return Err(DownloadError::NotStructured {
            url: url.to_string(),
        });
    }
    Ok(download)
}

/// Downloads any file and saves its bytes unchanged (no format detection).
pub fn download_raw_and_save(
    url: &str,
    requested: &Path,
    fetch_opts: &FetchOptions,
    cfg: &PersistConfig,
) -> Result<persist::Persisted, DownloadError> {
    tracing::info!(url, "downloading raw file");
    let payload = fetch::fetch_raw(url, fetch_opts)?;
    let path = naming::derive_path(requested, cfg.add_timestamp);
    Ok(persist::persist_raw(&payload.bytes, &path, cfg)?)
}

/// Downloads JSON only.
pub fn download_json(url: &str, fetch_opts: &FetchOptions) -> Result<serde_json::Value, DownloadError> {
    match fetch::fetch(url, fetch_opts)? {
        FetchResult::Structured(value) => Ok(value),
        FetchResult::Text(_) => Err(DownloadError::NotStructured {
            url: url.to_string(),
        }),
    }
}

/// Downloads text; structured content is rendered back to JSON with a 2-space indent.
pub fn download_text(url: &str, fetch_opts: &FetchOptions) -> Result<String, DownloadError> {
    match fetch::fetch(url, fetch_opts)? {
        FetchResult::Text(text) => Ok(text),
        FetchResult::Structured(value) => {
            let bytes = persist::to_pretty_json(&value, 2).map_err(PersistError::from)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
