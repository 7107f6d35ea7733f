use crate::http::Request;
use crate::registry::{PreferredCharsets, PreferredLanguages};
use tracing::trace;

/// Parses a comma-separated HTTP quality list (`Accept-Language`,
/// `Accept-Charset`) into tags sorted by descending quality. Tags are
/// lowercased, `q` defaults to 1.0 and entries with an unparsable or
/// out-of-range `q` are dropped. Ties keep header order.
pub fn parse_quality_list(raw: &str) -> Vec<(String, f32)> {
    let mut entries: Vec<(String, f32)> = Vec::new();

    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let mut pieces = part.split(';');
        let tag = pieces.next().unwrap_or("").trim().to_ascii_lowercase();
        if tag.is_empty() {
            continue;
        }

        let mut quality = 1.0f32;
        let mut malformed = false;
        for param in pieces {
            let param = param.trim();
            if let Some(value) = param.strip_prefix("q=") {
                match value.trim().parse::<f32>() {
                    Ok(q) if (0.0..=1.0).contains(&q) => quality = q,
                    _ => malformed = true,
                }
            }
        }
        if malformed {
            trace!(entry = part, "dropping malformed quality entry");
            continue;
        }

        entries.push((tag, quality));
    }

    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
}

/// Adapter from a request to its preference-ordered language list, read
/// from the `Accept-Language` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLanguages;

impl PreferredLanguages for BrowserLanguages {
    fn preferred_languages(&self, request: &Request) -> Vec<String> {
        let Some(raw) = request.header("accept-language") else {
            return Vec::new();
        };
        parse_quality_list(raw)
            .into_iter()
            .filter(|(_, q)| *q > 0.0)
            .map(|(tag, _)| tag)
            .collect()
    }
}

/// Adapter from a request to its acceptable charsets, read from the
/// `Accept-Charset` header. A request without the header accepts utf-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCharsets;

impl PreferredCharsets for HttpCharsets {
    fn preferred_charsets(&self, request: &Request) -> Vec<String> {
        let Some(raw) = request.header("accept-charset") else {
            return vec!["utf-8".to_string()];
        };
        parse_quality_list(raw)
            .into_iter()
            .filter(|(_, q)| *q > 0.0)
            .map(|(tag, _)| tag)
            .collect()
    }
}
