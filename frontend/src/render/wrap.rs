//! Break opportunities for long tokens and URLs so they don't overflow the
//! chat bubble.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::LONG_TOKEN_MIN_LEN;

lazy_static! {
    // URLs are tried first so a long host name inside a link ends up in the
    // URL span instead of splitting it. `<` ends a URL so a link inside
    // `<strong>` keeps its closing tag outside the span.
    static ref BREAKABLE_RUN: Regex = Regex::new(&format!(
        r"(?P<url>https?://[^\s<]+)|(?P<token>[a-zA-Z0-9]{{{},}})",
        LONG_TOKEN_MIN_LEN
    ))
    .expect("breakable run pattern must compile");
}

/// Mark long alphanumeric runs and URLs as breakable spans.
///
/// Only used on free text, heading text is emitted as-is.
pub fn wrap_long_text(text: &str) -> String {
    BREAKABLE_RUN
        .replace_all(text, |caps: &regex::Captures| {
            if let Some(url) = caps.name("url") {
                format!(r#"<span class="breakable-url">{}</span>"#, url.as_str())
            } else {
                format!(r#"<span class="breakable-text">{}</span>"#, &caps["token"])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_token_is_breakable() {
        let out = wrap_long_text("abcdefghij0123456789");
        assert_eq!(
            out,
            r#"<span class="breakable-text">abcdefghij0123456789</span>"#
        );
    }

    #[test]
    fn short_token_is_left_alone() {
        assert_eq!(wrap_long_text("abcdefghij"), "abcdefghij");
        // 14 characters is still below the threshold.
        assert_eq!(wrap_long_text("abcdefghijklmn"), "abcdefghijklmn");
    }

    #[test]
    fn url_is_breakable() {
        let out = wrap_long_text("see https://example.com/page for details");
        assert_eq!(
            out,
            r#"see <span class="breakable-url">https://example.com/page</span> for details"#
        );
    }

    #[test]
    fn long_host_stays_inside_url_span() {
        let out = wrap_long_text("https://www.nestleprofessionalfood.com");
        assert_eq!(
            out,
            r#"<span class="breakable-url">https://www.nestleprofessionalfood.com</span>"#
        );
        assert!(!out.contains("breakable-text"));
    }

    #[test]
    fn url_stops_before_markup() {
        let out = wrap_long_text("<strong>https://example.com</strong>");
        assert_eq!(
            out,
            r#"<strong><span class="breakable-url">https://example.com</span></strong>"#
        );
    }
}
