//! Turns the assistant's markdown-ish answer into chat-bubble HTML.
//!
//! Answers are parsed line by line into [`FormattedBlock`]s. When that pass
//! finds no heading and no numbered item (typically a numbered list glued
//! into one run of text), the raw answer goes through a regex pipeline
//! instead. The two passes can disagree on the same input; both are kept.

use lazy_static::lazy_static;
use regex::Regex;

use super::wrap::wrap_long_text;

lazy_static! {
    static ref NUMBERED_LINE: Regex =
        Regex::new(r"^([0-9]+)\.\s(.*)$").expect("numbered line pattern must compile");
    static ref BOLD_TITLE: Regex =
        Regex::new(r"^(\*\*[^*]+\*\*:?)\s*(.*)$").expect("bold title pattern must compile");
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern must compile");

    static ref FALLBACK_H3: Regex =
        Regex::new(r"### (.*?)(\n|$)").expect("h3 pattern must compile");
    static ref FALLBACK_H2: Regex =
        Regex::new(r"## (.*?)(\n|$)").expect("h2 pattern must compile");
    static ref FALLBACK_LIST_NUMBER: Regex =
        Regex::new(r"([0-9]+\.\s)").expect("list number pattern must compile");
    static ref LEADING_BREAKS: Regex =
        Regex::new(r"^(<br>)+").expect("leading break pattern must compile");
}

/// One structured block of an answer, in source line order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormattedBlock {
    /// `## ` (level 2) or `### ` (level 3) heading with `**` markers removed.
    Heading { level: u8, text: String },
    /// `N. ` list line. `title` is a leading `**bold**` run without its
    /// markers and trailing colon.
    NumberedItem {
        number: String,
        title: Option<String>,
        body: String,
    },
    /// Any other non-blank line, trimmed but otherwise verbatim.
    Paragraph(String),
}

impl FormattedBlock {
    /// Headings and numbered items count as structure, paragraphs don't.
    pub fn is_structured(&self) -> bool {
        !matches!(self, FormattedBlock::Paragraph(_))
    }

    pub fn to_html(&self) -> String {
        match self {
            FormattedBlock::Heading { level, text } => {
                format!(r#"<h{0} class="response-heading">{1}</h{0}>"#, level, text)
            }
            FormattedBlock::NumberedItem {
                number,
                title: Some(title),
                body,
            } => {
                let description = if body.is_empty() {
                    String::new()
                } else {
                    format!(
                        r#"<span class="item-description">{}</span>"#,
                        wrap_long_text(body)
                    )
                };
                format!(
                    r#"<div class="numbered-item"><span class="item-number">{}. </span><div class="item-content"><strong class="item-title">{}</strong>{}</div></div>"#,
                    number, title, description
                )
            }
            FormattedBlock::NumberedItem {
                number,
                title: None,
                body,
            } => format!(
                r#"<div class="numbered-item"><span class="item-number">{}. </span><div class="item-content">{}</div></div>"#,
                number,
                wrap_long_text(body)
            ),
            FormattedBlock::Paragraph(text) => format!(
                r#"<p class="response-paragraph">{}</p>"#,
                wrap_long_text(&bold_to_html(text))
            ),
        }
    }
}

/// Format an answer into an HTML fragment. Never fails; empty or blank input
/// yields an empty string.
pub fn format_response(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let blocks = parse_blocks(text);
    if has_structure(&blocks) {
        blocks.iter().map(FormattedBlock::to_html).collect()
    } else {
        format_fallback(text)
    }
}

/// Split an answer into blocks, one per non-blank line.
pub fn parse_blocks(text: &str) -> Vec<FormattedBlock> {
    text.split('\n').filter_map(parse_line).collect()
}

pub fn has_structure(blocks: &[FormattedBlock]) -> bool {
    blocks.iter().any(FormattedBlock::is_structured)
}

fn parse_line(raw: &str) -> Option<FormattedBlock> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix("### ") {
        return Some(FormattedBlock::Heading {
            level: 3,
            text: rest.replace("**", ""),
        });
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Some(FormattedBlock::Heading {
            level: 2,
            text: rest.replace("**", ""),
        });
    }

    // Only leading whitespace is dropped here so a bare "1. " still counts
    // as a list item.
    if let Some(caps) = NUMBERED_LINE.captures(raw.trim_start()) {
        let number = caps[1].to_string();
        let content = caps[2].trim_end();

        if let Some(bold) = BOLD_TITLE.captures(content) {
            let title = bold[1].replace("**", "");
            let title = title.strip_suffix(':').unwrap_or(title.as_str()).to_string();
            return Some(FormattedBlock::NumberedItem {
                number,
                title: Some(title),
                body: bold[2].to_string(),
            });
        }

        return Some(FormattedBlock::NumberedItem {
            number,
            title: None,
            body: content.to_string(),
        });
    }

    Some(FormattedBlock::Paragraph(line.to_string()))
}

fn bold_to_html(text: &str) -> String {
    BOLD.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// Regex pass over the raw answer, used when the line parser found no
/// structure.
fn format_fallback(text: &str) -> String {
    let html = FALLBACK_H3.replace_all(text, r#"<h3 class="response-heading">${1}</h3>"#);
    let html = FALLBACK_H2.replace_all(&html, r#"<h2 class="response-heading">${1}</h2>"#);
    let html = bold_to_html(&html);
    let html = FALLBACK_LIST_NUMBER
        .replace_all(&html, r#"<br><br><span class="list-number">${1}</span>"#)
        .into_owned();
    let html = html
        .replace("\n\n", r#"</p><p class="response-paragraph">"#)
        .replace('\n', "<br>");
    let html = LEADING_BREAKS.replace(&html, "").into_owned();

    if !html.is_empty() && !html.contains("<p") {
        format!(
            r#"<p class="response-paragraph">{}</p>"#,
            wrap_long_text(&html)
        )
    } else {
        html
    }
}
