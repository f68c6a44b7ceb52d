//! Raw input to parsed host and path segments.

use crate::error::NormalizeError;
use url::Url;

/// Host and non-empty path segments of a user-supplied URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Lowercased host as serialized by the URL parser.
    pub hostname: String,
    /// Path split on `/` with empty segments removed. Kept percent-encoded.
    pub path_segments: Vec<String>,
}

impl ParsedRequest {
    /// Trims `input`, adds `https://` when no http(s) scheme is present, and parses it.
    pub fn parse(input: &str) -> Result<Self, NormalizeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NormalizeError::EmptyInput);
        }

        let with_scheme = ensure_scheme(trimmed);
        let parsed = Url::parse(&with_scheme).map_err(NormalizeError::MalformedUrl)?;
        let hostname = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or(NormalizeError::MalformedUrl(url::ParseError::EmptyHost))?
            .to_string();

        let path_segments = parsed
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            hostname,
            path_segments,
        })
    }
}

fn has_http_scheme(s: &str) -> bool {
    let starts_with = |prefix: &str| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with("http://") || starts_with("https://")
}

/// Returns `s` unchanged if it already starts with `http://` or `https://` (any case).
pub(crate) fn ensure_scheme(s: &str) -> String {
    if has_http_scheme(s) {
        s.to_string()
    } else {
        format!("https://{s}")
    }
}
