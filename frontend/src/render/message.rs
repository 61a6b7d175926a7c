//! Assembles the HTML for a bot message: assistant prefix, formatted answer,
//! and the collapsible references list.

use crate::constants::{ASSISTANT_NAME, MAX_PREVIEW_SOURCES, SHOW_ALL_LABEL, SHOW_LESS_LABEL};
use crate::utils::escape_html;

use super::formatter::format_response;
use super::sources::{process_sources, SourceDescriptor};

/// Full inner HTML for a bot reply with its (possibly empty) sources.
pub fn bot_message_html<S: AsRef<str>>(answer: &str, sources: &[S]) -> String {
    let mut html = format!(
        "<strong>{}:</strong> {}",
        ASSISTANT_NAME,
        format_response(answer)
    );
    html.push_str(&sources_html(&process_sources(sources)));
    html
}

/// Inner HTML for a bot message that carries plain text only, such as the
/// apology shown when the backend can't be reached.
pub fn plain_bot_message_html(text: &str) -> String {
    format!("<strong>{}:</strong> {}", ASSISTANT_NAME, escape_html(text))
}

/// The references block. Empty when there are no sources.
pub fn sources_html(descriptors: &[SourceDescriptor]) -> String {
    if descriptors.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="sources"><div class="sources-header">"#);
    html.push_str(&format!(
        r#"<strong>References: <span class="source-count">({})</span></strong>"#,
        descriptors.len()
    ));
    if descriptors.len() > MAX_PREVIEW_SOURCES {
        html.push_str(&format!(
            r#"<button class="toggle-sources" type="button"><span class="toggle-text">{}</span><span class="toggle-icon">▼</span></button>"#,
            SHOW_ALL_LABEL
        ));
    }
    html.push_str(r#"</div><ul class="sources-list">"#);

    for source in descriptors {
        let item_class = if source.overflow {
            "source-item hidden-source"
        } else {
            "source-item"
        };
        html.push_str(&format!(
            r#"<li class="{}"><a href="{}" target="_blank" rel="noopener noreferrer"><span class="reference-number">{}</span>{}</a></li>"#,
            item_class,
            escape_html(&source.url),
            source.index,
            escape_html(&source.label)
        ));
    }

    html.push_str("</ul></div>");
    html
}

/// Next caption for the sources toggle button.
pub fn toggle_label(current: &str) -> &'static str {
    if current == SHOW_ALL_LABEL {
        SHOW_LESS_LABEL
    } else {
        SHOW_ALL_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("https://site{}.example.com/", i)).collect()
    }

    #[test]
    fn answer_without_sources() {
        let none: [&str; 0] = [];
        let html = bot_message_html("### Hello", &none);
        assert_eq!(
            html,
            r#"<strong>Nestlé Assistant:</strong> <h3 class="response-heading">Hello</h3>"#
        );
    }

    #[test]
    fn references_count_uses_unique_sources() {
        let html = bot_message_html(
            "Answer",
            &["https://example.com/a", "https://example.com/a", "https://example.com/b"],
        );
        assert!(html.contains(r#"<span class="source-count">(2)</span>"#));
        assert_eq!(html.matches("<li ").count(), 2);
        assert!(!html.contains("toggle-sources"));
        assert!(!html.contains("hidden-source"));
    }

    #[test]
    fn toggle_and_hidden_items_past_three() {
        let html = sources_html(&process_sources(&urls(5)));
        assert!(html.contains(r#"<button class="toggle-sources""#));
        assert!(html.contains(r#"<span class="toggle-text">Show All</span>"#));
        assert_eq!(html.matches("hidden-source").count(), 2);
        assert!(html.contains(r#"<span class="reference-number">5</span>site5.example.com"#));
    }

    #[test]
    fn exactly_three_sources_have_no_toggle() {
        let html = sources_html(&process_sources(&urls(3)));
        assert!(!html.contains("toggle-sources"));
    }

    #[test]
    fn link_markup() {
        let html = sources_html(&process_sources(&["https://www.nestle.com/brands/kitkat"]));
        assert!(html.contains(
            r#"<li class="source-item"><a href="https://www.nestle.com/brands/kitkat" target="_blank" rel="noopener noreferrer"><span class="reference-number">1</span>Nestlé Official - Kitkat</a></li>"#
        ));
    }

    #[test]
    fn url_is_escaped_in_attribute() {
        let html = sources_html(&process_sources(&[r#"https://example.com/a"onmouseover="x"#]));
        assert!(!html.contains(r#""onmouseover"#));
        assert!(html.contains("&quot;onmouseover=&quot;x"));
    }

    #[test]
    fn plain_message_is_escaped() {
        assert_eq!(
            plain_bot_message_html("1 < 2"),
            "<strong>Nestlé Assistant:</strong> 1 &lt; 2"
        );
    }

    #[test]
    fn toggle_label_flips() {
        assert_eq!(toggle_label("Show All"), "Show Less");
        assert_eq!(toggle_label("Show Less"), "Show All");
    }
}
