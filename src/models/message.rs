use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// Short label used when rendering the message list.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
        }
    }
}

/// A single entry of a conversation.
///
/// Messages are never edited after they are appended. For image replies
/// `content` holds the URL of the generated image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,
    /// Text of the message, or the image URL when `is_image` is set
    pub content: String,
    /// Creation time in milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,
    /// Whether `content` refers to a generated image
    #[serde(default)]
    pub is_image: bool,
    /// Whether the generated image was shared with the community feed
    #[serde(default)]
    pub is_published: bool,
    /// Fields the backend sent that the client does not interpret.
    ///
    /// Kept so a reply can be stored exactly as it was received.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Message {
    /// Build the optimistic user message for a prompt that is about to be sent.
    pub fn user_prompt(prompt: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: prompt.into(),
            timestamp: Utc::now().timestamp_millis(),
            is_image: false,
            is_published: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Build an assistant text message. Mostly useful for fixtures.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
            is_image: false,
            is_published: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Creation time as a `DateTime`, if the timestamp is representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
