// Element ids the widget binds to - the host page must provide all of them
pub const CHATBOT_TOGGLE_ID: &str = "chatbotToggle";
pub const CHATBOX_ID: &str = "chatbox";
pub const CHAT_CLOSE_ID: &str = "chatClose";
pub const USER_INPUT_ID: &str = "userInput";
pub const SEND_BUTTON_ID: &str = "sendButton";
pub const CHAT_MESSAGES_ID: &str = "chatMessages";
pub const TYPING_INDICATOR_ID: &str = "typingIndicator";

// Toggle button glyphs
pub const TOGGLE_OPEN_ICON: &str = "×";
pub const TOGGLE_CLOSED_ICON: &str = "💬";

// Message defaults
pub const ASSISTANT_NAME: &str = "Nestlé Assistant";
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again later.";

// Sources list
pub const MAX_PREVIEW_SOURCES: usize = 3;
pub const SHOW_ALL_LABEL: &str = "Show All";
pub const SHOW_LESS_LABEL: &str = "Show Less";

// Label heuristics
pub const MAX_LABEL_SEGMENT_LEN: usize = 30;
pub const MAX_RAW_LABEL_LEN: usize = 50;
pub const RAW_LABEL_KEEP: usize = 47;

// Minimum run of alphanumerics that gets a break opportunity
pub const LONG_TOKEN_MIN_LEN: usize = 15;

// Delay before scrolling the message list, gives the DOM time to lay out
pub const SCROLL_DELAY_MS: u32 = 100;

// Backend endpoint, relative to the configured base URL
pub const CHAT_ENDPOINT: &str = "/chat";
