//! The floating chat widget: a toggle button, a panel with the transcript,
//! an input row and a typing indicator. The markup comes from the host page;
//! this adapter only holds the element handles and the open/typing flags.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::constants::{
    CHATBOT_TOGGLE_ID, CHATBOX_ID, CHAT_CLOSE_ID, CHAT_MESSAGES_ID, ERROR_REPLY, SCROLL_DELAY_MS,
    SEND_BUTTON_ID, TOGGLE_CLOSED_ICON, TOGGLE_OPEN_ICON, TYPING_INDICATOR_ID, USER_INPUT_ID,
};
use crate::dom_utils::{self, element_by_id};
use crate::models::Sender;
use crate::network::ApiClient;
use crate::render::{bot_message_html, plain_bot_message_html, toggle_label};

pub struct ChatWidget {
    document: Document,
    toggle_button: HtmlElement,
    chatbox: HtmlElement,
    close_button: HtmlElement,
    user_input: HtmlInputElement,
    send_button: HtmlButtonElement,
    messages: HtmlElement,
    typing_indicator: HtmlElement,
    is_open: Cell<bool>,
    is_typing: Cell<bool>,
}

impl ChatWidget {
    /// Grab the widget's elements. Fails if any of them is missing.
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            toggle_button: element_by_id(document, CHATBOT_TOGGLE_ID)?,
            chatbox: element_by_id(document, CHATBOX_ID)?,
            close_button: element_by_id(document, CHAT_CLOSE_ID)?,
            user_input: element_by_id(document, USER_INPUT_ID)?,
            send_button: element_by_id(document, SEND_BUTTON_ID)?,
            messages: element_by_id(document, CHAT_MESSAGES_ID)?,
            typing_indicator: element_by_id(document, TYPING_INDICATOR_ID)?,
            is_open: Cell::new(false),
            is_typing: Cell::new(false),
        })
    }

    /// Build the widget and wire up its event listeners.
    pub fn mount(document: &Document) -> Result<Rc<Self>, JsValue> {
        let widget = Rc::new(Self::from_document(document)?);
        widget.attach_listeners()?;
        Ok(widget)
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing.get()
    }

    fn attach_listeners(self: &Rc<Self>) -> Result<(), JsValue> {
        // Toggle button handler
        {
            let widget = Rc::clone(self);
            let toggle_handler = Closure::wrap(Box::new(move |_: Event| {
                widget.toggle_chat();
            }) as Box<dyn FnMut(_)>);
            self.toggle_button
                .add_event_listener_with_callback("click", toggle_handler.as_ref().unchecked_ref())?;
            toggle_handler.forget();
        }

        // Close button handler
        {
            let widget = Rc::clone(self);
            let close_handler = Closure::wrap(Box::new(move |_: Event| {
                widget.close_chat();
            }) as Box<dyn FnMut(_)>);
            self.close_button
                .add_event_listener_with_callback("click", close_handler.as_ref().unchecked_ref())?;
            close_handler.forget();
        }

        // Send button handler
        {
            let widget = Rc::clone(self);
            let send_handler = Closure::wrap(Box::new(move |_: Event| {
                widget.send_message();
            }) as Box<dyn FnMut(_)>);
            self.send_button
                .add_event_listener_with_callback("click", send_handler.as_ref().unchecked_ref())?;
            send_handler.forget();
        }

        // Enter in the input sends too
        {
            let widget = Rc::clone(self);
            let keypress_handler = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Enter" {
                    widget.send_message();
                }
            }) as Box<dyn FnMut(_)>);
            self.user_input.add_event_listener_with_callback(
                "keypress",
                keypress_handler.as_ref().unchecked_ref(),
            )?;
            keypress_handler.forget();
        }

        // Focus the input once the open animation has finished
        {
            let widget = Rc::clone(self);
            let transition_handler = Closure::wrap(Box::new(move |_: Event| {
                if widget.is_open.get() {
                    let _ = widget.user_input.focus();
                }
            }) as Box<dyn FnMut(_)>);
            self.chatbox.add_event_listener_with_callback(
                "transitionend",
                transition_handler.as_ref().unchecked_ref(),
            )?;
            transition_handler.forget();
        }

        Ok(())
    }

    pub fn toggle_chat(&self) {
        if self.is_open.get() {
            self.close_chat();
        } else {
            self.open_chat();
        }
    }

    pub fn open_chat(&self) {
        self.is_open.set(true);
        dom_utils::set_active(&self.chatbox);
        dom_utils::set_active(&self.toggle_button);
        self.toggle_button.set_inner_html(TOGGLE_OPEN_ICON);
    }

    pub fn close_chat(&self) {
        self.is_open.set(false);
        dom_utils::set_inactive(&self.chatbox);
        dom_utils::set_inactive(&self.toggle_button);
        self.toggle_button.set_inner_html(TOGGLE_CLOSED_ICON);
    }

    /// Send whatever is in the input box. Ignored while a reply is pending.
    pub fn send_message(self: &Rc<Self>) {
        let question = self.user_input.value().trim().to_string();
        if question.is_empty() || self.is_typing.get() {
            return;
        }

        if let Err(e) = self.add_message(&question, Sender::User) {
            web_sys::console::warn_1(&format!("Failed to render user message: {:?}", e).into());
        }
        self.user_input.set_value("");
        self.show_typing();

        let widget = Rc::clone(self);
        spawn_local(async move {
            let reply = ApiClient::ask(&question).await;
            widget.hide_typing();

            let rendered = match reply {
                Ok(response) => {
                    debug_log!(
                        "answer received ({} chars, {} sources)",
                        response.answer.len(),
                        response.sources.len()
                    );
                    widget.add_bot_message(&response.answer, &response.sources)
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Chat request failed: {:?}", e).into());
                    widget.add_message(ERROR_REPLY, Sender::Bot)
                }
            };
            if let Err(e) = rendered {
                web_sys::console::warn_1(&format!("Failed to render reply: {:?}", e).into());
            }
        });
    }

    /// Append a plain-text message. User text is never parsed as markup.
    pub fn add_message(&self, text: &str, sender: Sender) -> Result<(), JsValue> {
        let message_div = self.new_message_div(sender)?;
        match sender {
            Sender::User => message_div.set_text_content(Some(text)),
            Sender::Bot => message_div.set_inner_html(&plain_bot_message_html(text)),
        }
        self.messages.append_child(&message_div)?;
        self.scroll_to_bottom();
        Ok(())
    }

    /// Append a formatted bot reply with its references list.
    pub fn add_bot_message(&self, answer: &str, sources: &[String]) -> Result<(), JsValue> {
        let message_div = self.new_message_div(Sender::Bot)?;
        message_div.set_inner_html(&bot_message_html(answer, sources));
        attach_sources_toggle(&message_div)?;
        self.messages.append_child(&message_div)?;
        self.scroll_to_bottom();
        Ok(())
    }

    pub fn show_typing(&self) {
        self.is_typing.set(true);
        dom_utils::show_as(&self.typing_indicator, "flex");
        self.send_button.set_disabled(true);
        self.scroll_to_bottom();
    }

    pub fn hide_typing(&self) {
        self.is_typing.set(false);
        dom_utils::hide(&self.typing_indicator);
        self.send_button.set_disabled(false);
    }

    /// Scroll the transcript to the newest message once layout has settled.
    pub fn scroll_to_bottom(&self) {
        let messages = self.messages.clone();
        gloo_timers::callback::Timeout::new(SCROLL_DELAY_MS, move || {
            messages.set_scroll_top(messages.scroll_height());
        })
        .forget();
    }

    fn new_message_div(&self, sender: Sender) -> Result<Element, JsValue> {
        let message_div = self.document.create_element("div")?;
        message_div.set_class_name(&format!("message {}", sender.css_class()));
        Ok(message_div)
    }
}

/// Hook the "Show All" button (only rendered past three sources) to expand
/// the list and flip its caption.
fn attach_sources_toggle(message_div: &Element) -> Result<(), JsValue> {
    let Some(button) = message_div.query_selector(".toggle-sources")? else {
        return Ok(());
    };
    let Some(list) = message_div.query_selector(".sources-list")? else {
        return Ok(());
    };

    let button_clone = button.clone();
    let toggle_handler = Closure::wrap(Box::new(move |_: Event| {
        let _ = list.class_list().toggle("expanded");
        if let Ok(Some(text)) = button_clone.query_selector(".toggle-text") {
            let current = text.text_content().unwrap_or_default();
            text.set_text_content(Some(toggle_label(&current)));
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", toggle_handler.as_ref().unchecked_ref())?;
    toggle_handler.forget();

    Ok(())
}

// ---------------------------------------------------------------------------
// Browser tests (run with `wasm-pack test --headless --chrome`)
// ---------------------------------------------------------------------------
