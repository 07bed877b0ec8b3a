//! Writing downloaded content to disk.
//!
//! Structured content is pretty-printed JSON (key order kept, non-ASCII written
//! verbatim); text and raw payloads are written byte for byte. Writes are not
//! atomic: a failure may leave a partial file behind.

use crate::config::PersistConfig;
use crate::fetch::FetchResult;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persisted {
    pub bytes_written: u64,
    pub path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize JSON")]
    Serialize(#[from] serde_json::Error),
}

/// Serializes `value` as JSON indented by `indent` spaces per level.
pub fn to_pretty_json(value: &serde_json::Value, indent: usize) -> Result<Vec<u8>, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Writes fetched content to `path`: JSON for structured content, verbatim text otherwise.
pub fn persist(content: &FetchResult, path: &Path, cfg: &PersistConfig) -> Result<Persisted, PersistError> {
    let bytes = match content {
        FetchResult::Structured(value) => to_pretty_json(value, cfg.indent)?,
        FetchResult::Text(text) => text.as_bytes().to_vec(),
    };
    let persisted = write_file(&bytes, path, cfg.create_dirs)?;

    match content {
        FetchResult::Structured(_) => {
            tracing::info!(path = %persisted.path.display(), bytes = persisted.bytes_written, "saved as JSON");
        }
        FetchResult::Text(text) => {
            let lines = if text.is_empty() { 0 } else { text.matches('\n').count() + 1 };
            tracing::info!(
                path = %persisted.path.display(),
                bytes = persisted.bytes_written,
                lines,
                "saved as text"
            );
        }
    }
    Ok(persisted)
}

/// Writes `bytes` exactly as received.
pub fn persist_raw(bytes: &[u8], path: &Path, cfg: &PersistConfig) -> Result<Persisted, PersistError> {
    let persisted = write_file(bytes, path, cfg.create_dirs)?;
    tracing::info!(path = %persisted.path.display(), bytes = persisted.bytes_written, "saved raw file");
    Ok(persisted)
}

fn write_file(bytes: &[u8], path: &Path, create_dirs: bool) -> Result<Persisted, PersistError> {
    if create_dirs {
        ensure_parent_dir(path)?;
    }
    fs::write(path, bytes).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Persisted {
        bytes_written: bytes.len() as u64,
        path: path.to_path_buf(),
    })
}

/// Creates the parent directory of `path` (and its ancestors) if missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), PersistError> {
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| PersistError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::debug!("created directory {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cfg(indent: usize) -> PersistConfig {
        PersistConfig {
            indent,
            create_dirs: true,
            add_timestamp: false,
        }
    }

    #[test]
    fn structured_written_with_indent_and_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/data.json");
        let value: serde_json::Value = serde_json::from_str(r#"{"z": 1, "a": {"k": [true]}}"#).unwrap();

        let out = persist(&FetchResult::Structured(value.clone()), &path, &cfg(2)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"z\": 1,\n  \"a\": {\n    \"k\": [\n      true\n    ]\n  }\n}");
        assert_eq!(out.bytes_written, written.len() as u64);
        assert_eq!(out.path, path);
        let reparsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn non_ascii_not_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("u.json");
        persist(&FetchResult::Structured(json!({"name": "café ☕"})), &path, &cfg(4)).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("café ☕"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn text_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let text = "first\nsecond\n".to_string();
        let out = persist(&FetchResult::Text(text.clone()), &path, &cfg(4)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
        assert_eq!(out.bytes_written, text.len() as u64);
    }

    #[test]
    fn raw_bytes_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin/blob.dat");
        let bytes: Vec<u8> = (0u8..=255).collect();
        let out = persist_raw(&bytes, &path, &cfg(4)).unwrap();
        assert_eq!(fs::read(&path).unwrap(), bytes);
        assert_eq!(out.bytes_written, 256);
    }

    #[test]
    fn missing_dir_without_create_dirs_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent/file.txt");
        let cfg = PersistConfig {
            create_dirs: false,
            ..cfg(4)
        };
        let err = persist(&FetchResult::Text("x".into()), &path, &cfg).unwrap_err();
        assert!(matches!(err, PersistError::Write { .. }));
    }

    #[test]
    fn existing_dir_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        ensure_parent_dir(&path).unwrap();
        ensure_parent_dir(&path).unwrap();
        ensure_parent_dir(Path::new("bare-name.txt")).unwrap();
    }
}
