//! Pure text processing for bot replies. Nothing in here touches the DOM, so
//! it runs and tests natively as well as in the browser.

pub mod formatter;
pub mod message;
pub mod sources;
pub mod wrap;

#[cfg(test)]
mod render_prop_test;

pub use formatter::{format_response, parse_blocks, FormattedBlock};
pub use message::{bot_message_html, plain_bot_message_html, sources_html, toggle_label};
pub use sources::{clean_source_url, display_label, process_sources, SourceDescriptor};
pub use wrap::wrap_long_text;
