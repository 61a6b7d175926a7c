//! Utility helpers shared across the WASM frontend.

use unicode_segmentation::UnicodeSegmentation;

/// Upper-case the first ASCII word character of every word, leaving the rest
/// untouched. A word starts wherever an `[A-Za-z0-9_]` character follows a
/// non-word character or the start of the string.
///
/// `"dark chocolate"` becomes `"Dark Chocolate"`.
pub fn title_case_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_word = false;
    for ch in s.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

/// Shorten `s` to `keep` grapheme clusters followed by `…` when it has more
/// than `max` of them. Shorter strings are returned unchanged.
pub fn truncate_with_ellipsis(s: &str, max: usize, keep: usize) -> String {
    if s.graphemes(true).count() <= max {
        return s.to_string();
    }
    let mut out: String = s.graphemes(true).take(keep).collect();
    out.push('…');
    out
}

/// Escape the characters that matter inside HTML text and double-quoted
/// attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
