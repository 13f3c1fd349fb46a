use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message. The backend stores `"bot"` for assistant
/// messages; `"assistant"` is accepted as an alias when loading.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot", alias = "assistant")]
    Assistant,
}

/// One transcript entry. User content is plain text; assistant content
/// is HTML-ish markup (fence-stripped before it reaches rendering).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Message {
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: String) -> Self {
        Self {
            content,
            sender: Sender::User,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: String) -> Self {
        Self {
            content,
            sender: Sender::Assistant,
            timestamp: Utc::now(),
        }
    }
}

/// History panel entry; list order is whatever the backend returns.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ConversationSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(rename = "chatId")]
    pub chat_id: Option<String>,
}

/// `POST /chat/` reply: the conversation id (needed when the backend
/// just allocated one) and the assistant's response markup.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct SendMessageResponse {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub response: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ConversationPayload {
    pub messages: Vec<Message>,
}
