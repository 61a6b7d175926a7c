use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

#[macro_use]
mod macros;

pub mod components;
pub mod constants; // Element ids, thresholds and labels
pub mod dom_utils;
pub mod models;
pub mod network;
pub mod render; // Pure answer/source formatting, no DOM access
pub mod state;
pub mod utils;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    network::init_api_config();

    let document = document()?;

    // The module may load before the widget markup has been parsed
    if markup_pending(&document.ready_state()) {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move |_: Event| {
            if let Err(e) = boot(&doc) {
                web_sys::console::error_1(&format!("Chat widget failed to start: {:?}", e).into());
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot(&document)?;
    }

    Ok(())
}

fn boot(document: &Document) -> Result<(), JsValue> {
    state::mount_widget(document)?;
    dom_utils::enable_smooth_anchor_scroll(document)?;
    debug_log!("Chat widget mounted");
    Ok(())
}

// `Document.readyState` is "loading" until the HTML has been parsed
fn markup_pending(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Legacy free function kept for pages that call `send_message()` from an
/// inline handler. Mounts the widget first if `start` hasn't.
#[wasm_bindgen]
pub fn send_message() -> Result<(), JsValue> {
    let widget = match state::mounted_widget() {
        Some(widget) => widget,
        None => state::mount_widget(&document()?)?,
    };
    widget.send_message();
    Ok(())
}

/// Format an answer into HTML, for callers that render messages themselves.
#[wasm_bindgen(js_name = format_response)]
pub fn format_response_js(text: &str) -> String {
    render::format_response(text)
}

/// Clean and label a list of source URLs. Returns an array of
/// `{index, url, label, overflow}` objects; non-string entries are skipped.
#[wasm_bindgen(js_name = process_sources)]
pub fn process_sources_js(urls: js_sys::Array) -> Result<JsValue, JsValue> {
    let urls: Vec<String> = urls.iter().filter_map(|v| v.as_string()).collect();
    serde_wasm_bindgen::to_value(&render::process_sources(&urls)).map_err(JsValue::from)
}
