//! Static HTML report: summary table followed by one detail section per comparison.

use super::{original_screenshot, target_screenshot, ComparisonRecord};
use crate::config::ReportConfig;
use crate::persist::ensure_parent_dir;
use crate::pixel_diff::PixelDiffResult;
use crate::url_diff::UrlDiff;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Component, Path, PathBuf};

const TITLE: &str = "URL and Screenshot Comparison Report";

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; }
        table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; word-wrap: break-word; max-width: 300px; }
        th { background-color: #f2f2f2; }
        img { width: 200px; height: auto; transition: transform 0.3s; }
        img:hover { transform: scale(2); z-index: 100; position: relative; }
        .comparison-table td { vertical-align: top; }
        .result-section { margin-bottom: 40px; }
        .clickable:hover { cursor: pointer; background-color: #e0e0e0; }
        .url-pair { word-break: break-word; max-width: 400px; }
        .url-diff { color: red; font-weight: bold; }
        .status-failed { color: #b00020; }
"#;

const SCRIPT: &str = r#"
        function scrollToResult(index) {
            document.getElementById('result-' + index).scrollIntoView({ behavior: 'smooth' });
        }
"#;

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn path_attr(path: &Path) -> String {
    escape(&path.to_string_lossy())
}

/// Absolute, lexically normalized components of `path`. Relative paths are taken from `cwd`.
fn normalized_components(path: &Path, cwd: &Path) -> Vec<String> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let mut parts = Vec::new();
    let mut root_len = 0;
    for component in absolute.components() {
        match component {
            Component::Prefix(p) => {
                parts.push(p.as_os_str().to_string_lossy().into_owned());
                root_len += 1;
            }
            Component::RootDir => {
                parts.push(String::new());
                root_len += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.len() > root_len {
                    parts.pop();
                }
            }
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
        }
    }
    parts
}

/// `target` as a `/`-separated link that resolves from `report_dir`.
///
/// Both paths may be relative to `cwd`. Falls back to the target as written
/// when the two share no root.
fn relative_link(target: &Path, report_dir: &Path, cwd: &Path) -> String {
    let from = normalized_components(report_dir, cwd);
    let to = normalized_components(target, cwd);
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    if common == 0 {
        return target.to_string_lossy().into_owned();
    }
    let mut segments: Vec<&str> = vec![".."; from.len() - common];
    segments.extend(to[common..].iter().map(String::as_str));
    if segments.is_empty() {
        return ".".to_string();
    }
    segments.join("/")
}

/// Resolves image paths into `src` values for a report written to `output_path`.
struct Links {
    report_dir: PathBuf,
    cwd: PathBuf,
}

impl Links {
    fn for_report(output_path: &Path) -> Self {
        Self {
            report_dir: output_path.parent().map(Path::to_path_buf).unwrap_or_default(),
            cwd: std::env::current_dir().unwrap_or_default(),
        }
    }

    fn src(&self, path: &Path) -> String {
        escape(&relative_link(path, &self.report_dir, &self.cwd))
    }
}

/// Short status shown in the summary table.
pub fn status_text(result: &PixelDiffResult) -> String {
    match result {
        Ok(d) if d.identical => "Identical".to_string(),
        Ok(d) => format!("Different ({} pixels)", d.differing_pixels),
        Err(e) => format!("Could not compare: {e}"),
    }
}

/// Renders the report document. Image links are relative to the directory of `cfg.output_path`.
///
/// # Panics
///
/// If the three sequences differ in length; they must be index-aligned.
pub fn render(
    records: &[ComparisonRecord],
    url_diffs: &[UrlDiff],
    pixel_results: &[PixelDiffResult],
    cfg: &ReportConfig,
) -> String {
    assert_eq!(records.len(), url_diffs.len(), "records and url diffs must be index-aligned");
    assert_eq!(records.len(), pixel_results.len(), "records and pixel results must be index-aligned");

    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{TITLE}</title>
    <style>{STYLE}    </style>
    <script>{SCRIPT}    </script>
</head>
<body>
    <h1>{TITLE}</h1>

    <h2>Summary of Comparisons</h2>
    <table>
        <tr>
            <th>Index with Original Link</th>
            <th>Compare 2 Actual URL Browser Results</th>
            <th>Compare Screen Result</th>
            <th>Click</th>
        </tr>
"#
    );

    for (i, ((record, url_diff), pixel)) in records.iter().zip(url_diffs).zip(pixel_results).enumerate() {
        let status_class = if pixel.is_err() { " class=\"status-failed\"" } else { "" };
        let _ = write!(
            html,
            r#"        <tr>
            <td>{i}_{link}</td>
            <td>{url}</td>
            <td{status_class}>{status}</td>
            <td class="clickable" onclick="scrollToResult({i})">Click</td>
        </tr>
"#,
            link = escape(&record.origin_link),
            url = url_diff.to_html(),
            status = escape(&status_text(pixel)),
        );
    }

    html.push_str("    </table>\n\n    <h2>Detailed Comparison Results</h2>\n");

    let links = Links::for_report(&cfg.output_path);

    for (i, (record, pixel)) in records.iter().zip(pixel_results).enumerate() {
        let original = original_screenshot(cfg, record);
        let target = target_screenshot(cfg, record);
        let result_cell = match pixel {
            Ok(d) => format!(r#"<img src="{}" alt="Difference {i}">"#, links.src(&d.diff_image)),
            Err(e) => format!(
                r#"<span class="status-failed">Could not compare: {}</span>"#,
                escape(&e.to_string())
            ),
        };
        let _ = write!(
            html,
            r#"    <div class="result-section" id="result-{i}">
        <h3>{i}_{heading}</h3>
        <table class="comparison-table">
            <tr>
                <th>Original</th>
                <th>Target</th>
                <th>Result of Comparison</th>
            </tr>
            <tr>
                <td><img src="{original}" alt="Original {i}"></td>
                <td><img src="{target}" alt="Target {i}"></td>
                <td>{result_cell}</td>
            </tr>
        </table>
    </div>
"#,
            heading = path_attr(&original),
            original = links.src(&original),
            target = links.src(&target),
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Renders the report and writes it to `cfg.output_path`, replacing any previous report.
pub fn assemble(
    records: &[ComparisonRecord],
    url_diffs: &[UrlDiff],
    pixel_results: &[PixelDiffResult],
    cfg: &ReportConfig,
) -> Result<PathBuf> {
    let html = render(records, url_diffs, pixel_results, cfg);
    let path = cfg.output_path.clone();
    ensure_parent_dir(&path)?;
    fs::write(&path, html).with_context(|| format!("failed to write report {}", path.display()))?;
    tracing::info!(entries = records.len(), "report written to {}", path.display());
    Ok(path)
}
