use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// HTTP request defaults for the content downloader (`[fetch]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Sent as `User-Agent` unless the caller supplies its own headers.
    pub user_agent: String,
    /// Sent as `Accept` unless the caller supplies its own headers.
    pub accept: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("snapdiff/", env!("CARGO_PKG_VERSION")).to_string(),
            accept: "application/json, text/plain, text/*, */*".to_string(),
            timeout_secs: 30,
        }
    }
}

/// How downloaded content is written (`[persist]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistConfig {
    /// Indent width for pretty-printed JSON.
    pub indent: usize,
    /// Create missing parent directories before writing.
    pub create_dirs: bool,
    /// Insert a `_YYMMDD_HH:MM` token before the file extension.
    pub add_timestamp: bool,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            create_dirs: true,
            add_timestamp: true,
        }
    }
}

/// Screenshot locations and report output (`[report]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory holding origin screenshots, named `<shot id>.<image_extension>`.
    pub original_dir: PathBuf,
    /// Directory holding target screenshots.
    pub target_dir: PathBuf,
    /// Extension (without dot) of screenshot files.
    pub image_extension: String,
    /// Directory where generated diff images are written.
    pub diff_dir: PathBuf,
    /// Report document path; overwritten on every run.
    pub output_path: PathBuf,
    /// RGB color painted over differing pixels.
    pub marker_color: [u8; 3],
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            original_dir: PathBuf::from("report/original_images"),
            target_dir: PathBuf::from("report/target_images"),
            image_extension: "png".to_string(),
            diff_dir: PathBuf::from("."),
            output_path: PathBuf::from("comparison_report.html"),
            marker_color: [255, 0, 0],
        }
    }
}

/// Global configuration loaded from `~/.config/snapdiff/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapdiffConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub persist: PersistConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("snapdiff")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SnapdiffConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SnapdiffConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SnapdiffConfig = toml::from_str(&data)?;
    Ok(cfg)
}
