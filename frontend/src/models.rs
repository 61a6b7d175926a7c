use serde::{Deserialize, Serialize};

/// Body POSTed to the chat endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Answer returned by the chat endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Who authored a message in the transcript
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier class used on the message `<div>`
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_response_without_sources() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer":"Hi"}"#).unwrap();
        assert_eq!(resp.answer, "Hi");
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn chat_request_wire_shape() {
        let req = ChatRequest { question: "What is KitKat?".to_string() };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"question":"What is KitKat?"}"#
        );
    }
}
