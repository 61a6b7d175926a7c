use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::models::{ChatRequest, ChatResponse};

// REST client for the chat backend
pub struct ApiClient;

impl ApiClient {
    /// Send one question and wait for the answer. No retries: the caller
    /// decides what to show when this fails.
    pub async fn ask(question: &str) -> Result<ChatResponse, JsValue> {
        let url = super::get_api_config().chat_url();
        let body = serde_json::to_string(&ChatRequest {
            question: question.to_string(),
        })
        .map_err(|e| JsValue::from_str(&format!("Failed to encode question: {}", e)))?;

        debug_log!("POST {} ({} chars)", url, question.len());
        let text = Self::fetch_json(&url, "POST", Some(&body)).await?;
        parse_chat_response(&text)
    }

    /// Perform a request and return the raw response body. Non-2xx statuses
    /// are errors.
    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Accept", "application/json")?;

        // Add Content-Type & body if provided
        if let Some(data) = body {
            let js_body = JsValue::from_str(data);
            opts.set_body(&js_body);
            headers.append("Content-Type", "application/json")?;
        }

        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!(
                "API request failed: {} {}",
                resp.status(),
                resp.status_text()
            )));
        }

        // Parse body as text – caller can decode JSON.
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}

/// Decode the chat endpoint's JSON body.
pub fn parse_chat_response(text: &str) -> Result<ChatResponse, JsValue> {
    serde_json::from_str(text)
        .map_err(|e| JsValue::from_str(&format!("Malformed chat response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_and_sources() {
        let resp = parse_chat_response(
            r#"{"answer":"KitKat is a wafer bar.","sources":["https://www.nestle.com/brands/kitkat"]}"#,
        )
        .unwrap();
        assert_eq!(resp.answer, "KitKat is a wafer bar.");
        assert_eq!(resp.sources, vec!["https://www.nestle.com/brands/kitkat"]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let resp = parse_chat_response(r#"{"answer":"Hi","sources":[],"latency_ms":12}"#).unwrap();
        assert_eq!(resp.answer, "Hi");
    }
}
