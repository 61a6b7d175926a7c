use crate::constants::CHAT_ENDPOINT;

/// Backend route configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin: the widget is normally served by the chat backend itself,
    /// so an empty base resolves `/chat` against the page's own host.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the build-time `API_BASE_URL` environment
    /// variable, falling back to same-origin when it is unset.
    pub fn new() -> Self {
        option_env!("API_BASE_URL")
            .map(Self::from_url)
            .unwrap_or_default()
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.base_url(), "");
        assert_eq!(cfg.chat_url(), "/chat");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ApiConfig::from_url("https://chat.example.com//");
        assert_eq!(cfg.base_url(), "https://chat.example.com");
        assert_eq!(cfg.chat_url(), "https://chat.example.com/chat");
    }
}
