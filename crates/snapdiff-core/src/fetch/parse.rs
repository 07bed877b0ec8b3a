//! Content-Type extraction and body classification.

use serde_json::Value;

use super::{FetchError, FetchResult};

const PREVIEW_CHARS: usize = 200;

/// Splits a `Name: value` header line and validates both halves.
pub fn parse_header(raw: &str) -> Result<(String, String), FetchError> {
    let (name, value) = raw.split_once(':').ok_or_else(|| FetchError::InvalidHeader {
        header: raw.to_string(),
        reason: "expected \"Name: value\"",
    })?;
    let (name, value) = (name.trim(), value.trim());
    validate_header(name, value)?;
    Ok((name.to_string(), value.to_string()))
}

/// Rejects header names that are not RFC 7230 tokens and values with line breaks.
pub fn validate_header(name: &str, value: &str) -> Result<(), FetchError> {
    let reason = if name.is_empty() {
        Some("empty header name")
    } else if !name.bytes().all(is_token_byte) {
        Some("header name contains invalid characters")
    } else if value.bytes().any(|b| matches!(b, b'\r' | b'\n' | 0)) {
        Some("header value contains a line break")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(FetchError::InvalidHeader {
            header: format!("{}: {}", name, value),
            reason,
        }),
        None => Ok(()),
    }
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// Returns the `Content-Type` of the final response from collected header lines.
///
/// With redirects libcurl reports every hop's headers; a status line resets the
/// value so a redirect's type never leaks into the final response.
pub fn parse_content_type(lines: &[String]) -> Option<String> {
    let mut content_type = None;
    for line in lines {
        let line = line.trim();
        if line.starts_with("HTTP/") {
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }
    content_type
}

/// Decides between structured and text content.
///
/// A declared JSON type is tried first; any other declared type still gets a
/// parse attempt. Only objects and arrays count as structured.
pub fn classify_body(content_type: Option<&str>, body: &[u8]) -> FetchResult {
    let declared_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);

    match parse_structured(body) {
        Some(value) => {
            if declared_json {
                tracing::info!("parsed as JSON ({})", describe(&value));
            } else {
                tracing::info!("parsed as JSON despite content type ({})", describe(&value));
            }
            return FetchResult::Structured(value);
        }
        None if declared_json => {
            tracing::warn!("content type indicates JSON but parsing failed, treating as text");
        }
        None => {}
    }

    let text = String::from_utf8_lossy(body).into_owned();
    let chars = text.chars().count();
    if chars > PREVIEW_CHARS {
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        tracing::info!(chars, "downloaded as text, preview: {:?}...", preview);
    } else {
        tracing::info!(chars, "downloaded as text: {:?}", text);
    }
    FetchResult::Text(text)
}

fn parse_structured(body: &[u8]) -> Option<Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(v @ (Value::Object(_) | Value::Array(_))) => Some(v),
        _ => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().take(5).map(String::as_str).collect();
            let more = if map.len() > 5 { ", ..." } else { "" };
            format!("{} top-level keys: {}{}", map.len(), keys.join(", "), more)
        }
        Value::Array(items) => format!("{} items in array", items.len()),
        _ => "scalar".to_string(),
    }
}
