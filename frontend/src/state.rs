use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::ChatWidget;

// The page has exactly one chat widget, created on first mount
thread_local! {
    pub static WIDGET: RefCell<Option<Rc<ChatWidget>>> = RefCell::new(None);
}

/// The mounted widget, if `mount_widget` has run.
pub fn mounted_widget() -> Option<Rc<ChatWidget>> {
    WIDGET.with(|widget| widget.borrow().clone())
}

/// Mount the widget on `document` unless one is already mounted, and return
/// it.
pub fn mount_widget(document: &Document) -> Result<Rc<ChatWidget>, JsValue> {
    if let Some(existing) = mounted_widget() {
        return Ok(existing);
    }

    let widget = ChatWidget::mount(document)?;
    WIDGET.with(|slot| {
        *slot.borrow_mut() = Some(Rc::clone(&widget));
    });
    Ok(widget)
}
