//! Source-link cleanup: dedup, redirect unwrapping, and short labels.
//!
//! Sources come back from the backend's web search, often still wrapped in
//! the search proxy's redirect (`?uddg=<encoded target>&rut=<token>`) and
//! sometimes percent-encoded twice.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::constants::{
    MAX_LABEL_SEGMENT_LEN, MAX_PREVIEW_SOURCES, MAX_RAW_LABEL_LEN, RAW_LABEL_KEEP,
};
use crate::utils::{title_case_words, truncate_with_ellipsis};

const MADE_WITH_NESTLE_LABEL: &str = "Made with Nestlé";
const NESTLE_OFFICIAL_LABEL: &str = "Nestlé Official";

// Escapes that survive a doubly-encoded redirect target. Upper-case only.
const RESIDUAL_ESCAPES: [(&str, &str); 6] = [
    ("%3A", ":"),
    ("%2F", "/"),
    ("%2E", "."),
    ("%3F", "?"),
    ("%3D", "="),
    ("%26", "&"),
];

lazy_static! {
    static ref RUT_SUFFIX: Regex = Regex::new(r"&rut=.*$").expect("rut pattern must compile");
    static ref EMBEDDED_URL: Regex =
        Regex::new(r"https?://[^\s&]+").expect("embedded url pattern must compile");
}

/// A cleaned, labelled source link ready to be rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceDescriptor {
    /// 1-based position after deduplication
    pub index: usize,
    pub url: String,
    pub label: String,
    /// Hidden behind the "Show All" toggle by default
    pub overflow: bool,
}

/// Deduplicate, clean and label a list of raw source URLs.
///
/// Order follows first occurrence. Everything past the first
/// [`MAX_PREVIEW_SOURCES`] entries is flagged as overflow.
pub fn process_sources<S: AsRef<str>>(urls: &[S]) -> Vec<SourceDescriptor> {
    let mut seen = HashSet::new();
    urls.iter()
        .map(AsRef::<str>::as_ref)
        .filter(|raw| seen.insert(*raw))
        .enumerate()
        .map(|(position, raw)| {
            let url = clean_source_url(raw);
            let label = display_label(&url);
            SourceDescriptor {
                index: position + 1,
                url,
                label,
                overflow: position >= MAX_PREVIEW_SOURCES,
            }
        })
        .collect()
}

/// Decode a raw source and unwrap any redirect around it. The result always
/// starts with `http`.
pub fn clean_source_url(raw: &str) -> String {
    // Bytes that don't decode to UTF-8 leave the source untouched.
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    let cleaned = decoded.replacen("?uddg=https%3A%2F%2F", "", 1);
    let cleaned = RUT_SUFFIX.replace(&cleaned, "");
    let mut cleaned = cleaned.replacen("?uddg=", "", 1);
    for (escape, ch) in RESIDUAL_ESCAPES {
        cleaned = cleaned.replace(escape, ch);
    }

    if let Some(found) = EMBEDDED_URL.find(&cleaned) {
        cleaned = found.as_str().to_string();
    }

    if !cleaned.starts_with("http") {
        cleaned.insert_str(0, "https://");
    }
    cleaned
}

/// Short human-readable name for a cleaned source URL, e.g.
/// `"Nestlé Official - Kitkat"`.
pub fn display_label(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| label_for(&parsed))
        .unwrap_or_else(|| truncate_with_ellipsis(url, MAX_RAW_LABEL_LEN, RAW_LABEL_KEEP))
}

/// `None` when the URL has no usable host.
fn label_for(parsed: &Url) -> Option<String> {
    let host = parsed.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        return None;
    }

    let mut label = if host.contains("nestle") {
        if host.contains("madewithnestle") {
            MADE_WITH_NESTLE_LABEL.to_string()
        } else {
            NESTLE_OFFICIAL_LABEL.to_string()
        }
    } else {
        host.to_string()
    };

    let last_segment = parsed.path_segments().and_then(|segments| {
        segments
            .filter(|part| !part.is_empty() && *part != "index.html")
            .last()
    });
    if let Some(segment) = last_segment {
        if segment.chars().count() < MAX_LABEL_SEGMENT_LEN {
            label.push_str(" - ");
            label.push_str(&title_case_words(&segment.replace('-', " ")));
        }
    }

    Some(label)
}
