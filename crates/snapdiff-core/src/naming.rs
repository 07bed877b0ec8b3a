//! Save-path derivation with an optional timestamp token.

use chrono::{Local, NaiveDateTime};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// chrono format of the token inserted before the extension (`YYMMDD_HH:MM`).
pub const TIMESTAMP_FORMAT: &str = "%y%m%d_%H:%M";

/// Returns the path to save to, stamped with the current local time when requested.
pub fn derive_path(requested: &Path, inject_timestamp: bool) -> PathBuf {
    if !inject_timestamp {
        return requested.to_path_buf();
    }
    let path = timestamped_path(requested, &Local::now().naive_local());
    tracing::debug!("added timestamp to filename: {}", path.display());
    path
}

/// Inserts `_YYMMDD_HH:MM` between the file stem and extension.
///
/// The extension is everything after the LAST dot of the final component, so
/// `a.tar.gz` becomes `a.tar_<stamp>.gz`. A name without a dot gets the token
/// appended. The directory part is kept as-is.
pub fn timestamped_path(requested: &Path, at: &NaiveDateTime) -> PathBuf {
    let stamp = at.format(TIMESTAMP_FORMAT).to_string();
    let file_name = requested
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stamped = match file_name.rsplit_once('.') {
        Some((name, ext)) => format!("{name}_{stamp}.{ext}"),
        None => format!("{file_name}_{stamp}"),
    };

    match requested.parent() {
        Some(dir) => dir.join(OsString::from(stamped)),
        None => PathBuf::from(stamped),
    }
}
