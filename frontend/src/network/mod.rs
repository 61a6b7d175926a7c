// Re-export network modules
pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::ApiClient;

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialize the API configuration from the build environment. Must be
/// called before any network operations.
pub fn init_api_config() {
    set_api_config(ApiConfig::new());
}

/// Initialize the API configuration from a JS-provided URL.
/// This allows runtime configuration of the API endpoints.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    set_api_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

fn set_api_config(config: ApiConfig) {
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(poisoned) => *poisoned.into_inner() = Some(config),
    }
}

/// Current API configuration, same-origin defaults when nothing was set.
pub(crate) fn get_api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}
