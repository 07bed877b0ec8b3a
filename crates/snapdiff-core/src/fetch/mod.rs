//! HTTP GET with structured (JSON) vs text detection.
//!
//! Uses the curl crate (libcurl) for a single blocking request. The declared
//! `Content-Type` is trusted first; a blind JSON parse is attempted next since
//! servers misreport kinds. Whatever does not parse is returned as text.

mod parse;

pub use parse::{classify_body, parse_content_type, parse_header, validate_header};

use crate::config::FetchConfig;
use std::str;
use std::time::Duration;

/// Content returned by [`fetch`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// Body parsed as a JSON object or array. Key order is kept as received.
    Structured(serde_json::Value),
    /// Body decoded as UTF-8 (lossy).
    Text(String),
}

impl FetchResult {
    pub fn is_structured(&self) -> bool {
        matches!(self, FetchResult::Structured(_))
    }
}

/// Body of a GET returned as-is, for opaque payloads.
#[derive(Debug, Clone)]
pub struct RawPayload {
    pub bytes: Vec<u8>,
    /// Declared `Content-Type`, if the server sent one.
    pub content_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (invalid URL, timeout, connection, etc.).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// A request header that cannot be sent as given.
    #[error("invalid header {header:?}: {reason}")]
    InvalidHeader { header: String, reason: &'static str },
}

/// Lower bound for the request timeout. libcurl treats zero as "no timeout".
pub const MIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Request headers and timeout for one fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl FetchOptions {
    /// Default `User-Agent` and `Accept` headers plus timeout from config.
    pub fn from_config(cfg: &FetchConfig) -> Self {
        Self {
            headers: vec![
                ("User-Agent".to_string(), cfg.user_agent.clone()),
                ("Accept".to_string(), cfg.accept.clone()),
            ],
            timeout: Duration::from_secs(cfg.timeout_secs).max(MIN_TIMEOUT),
        }
    }

    /// Replace the default headers entirely with caller-supplied ones.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Overrides the timeout; values below [`MIN_TIMEOUT`] are raised to it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(MIN_TIMEOUT);
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

/// Downloads `url` and returns it as structured data or text.
///
/// Single attempt; transport errors and non-2xx statuses are returned immediately.
pub fn fetch(url: &str, opts: &FetchOptions) -> Result<FetchResult, FetchError> {
    tracing::info!(url, "downloading content");
    let raw = fetch_raw(url, opts)?;
    tracing::debug!(content_type = raw.content_type.as_deref().unwrap_or(""), "response received");
    Ok(classify_body(raw.content_type.as_deref(), &raw.bytes))
}

/// Downloads `url` and returns the body bytes untouched (no format detection).
pub fn fetch_raw(url: &str, opts: &FetchOptions) -> Result<RawPayload, FetchError> {
    for (name, value) in &opts.headers {
        validate_header(name.trim(), value.trim())?;
    }

    let mut body: Vec<u8> = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();

    let status = perform_get(url, opts, &mut body, &mut header_lines).map_err(|source| {
        tracing::warn!(url, "GET failed: {}", source);
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    })?;

    if !(200..300).contains(&status) {
        tracing::warn!(url, status, "GET returned non-success status");
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!(url, bytes = body.len(), "GET complete");
    Ok(RawPayload {
        bytes: body,
        content_type: parse_content_type(&header_lines),
    })
}

/// Runs the transfer, filling `body` and `header_lines`. Returns the final HTTP status.
fn perform_get(
    url: &str,
    opts: &FetchOptions,
    body: &mut Vec<u8>,
    header_lines: &mut Vec<String>,
) -> Result<u32, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.timeout(opts.timeout.max(MIN_TIMEOUT))?;

    // "Name: value" lines.
    let mut list = curl::easy::List::new();
    for (k, v) in &opts.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !opts.headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    easy.response_code()
}
