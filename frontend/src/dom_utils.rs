//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Element lookups return `Result` so a page missing part of the widget
//! markup fails once, at mount time, with the offending id in the message.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Look up an element by id and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has an unexpected type", id)))
}

/// Make the element visible using the given CSS `display` value.
pub fn show_as(el: &HtmlElement, display: &str) {
    let _ = el.style().set_property("display", display);
}

/// Hide the element via inline `display: none`.
pub fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

/// Add the `active` modifier class.
pub fn set_active(el: &Element) {
    let _ = el.class_list().add_1("active");
}

/// Remove the `active` modifier class.
pub fn set_inactive(el: &Element) {
    let _ = el.class_list().remove_1("active");
}

// ---------------------------------------------------------------------------
// In-page anchors
// ---------------------------------------------------------------------------

/// Make every `<a href="#…">` on the page scroll smoothly to its target
/// instead of jumping.
pub fn enable_smooth_anchor_scroll(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;

    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let document_clone = document.clone();
        let anchor_clone = anchor.clone();
        let click_handler = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let Some(href) = anchor_clone.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector, nothing to scroll to.
            if let Ok(Some(target)) = document_clone.query_selector(&href) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);

        anchor.add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref())?;
        click_handler.forget();
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests (browser only, run with `wasm-pack test --headless`)
// ---------------------------------------------------------------------------

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn element_lookup_reports_missing_id() {
        let err = element_by_id::<HtmlElement>(&document(), "does-not-exist").unwrap_err();
        assert!(err.as_string().unwrap().contains("#does-not-exist"));
    }

    #[wasm_bindgen_test]
    fn show_hide_and_active_helpers() {
        let doc = document();
        let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();

        hide(&el);
        assert_eq!(el.style().get_property_value("display").unwrap(), "none");
        show_as(&el, "flex");
        assert_eq!(el.style().get_property_value("display").unwrap(), "flex");

        set_active(&el);
        assert!(el.class_list().contains("active"));
        set_inactive(&el);
        assert!(!el.class_list().contains("active"));
    }
}
