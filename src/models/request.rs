use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::chat::Chat;
use super::message::Message;
use super::user::User;

/// Which generation route a prompt is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    #[default]
    Text,
    Image,
}

impl ChatMode {
    /// Path segment of the message route (`/api/message/{mode}`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Text => "text",
            ChatMode::Image => "image",
        }
    }

    /// Credits consumed by one successful submission in this mode.
    pub fn credit_cost(&self) -> i64 {
        match self {
            ChatMode::Text => 1,
            ChatMode::Image => 2,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ChatMode::Text => ChatMode::Image,
            ChatMode::Image => ChatMode::Text,
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatMode::Text => write!(f, "Text"),
            ChatMode::Image => write!(f, "Image"),
        }
    }
}

impl FromStr for ChatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ChatMode::Text),
            "image" => Ok(ChatMode::Image),
            other => Err(format!("unknown chat mode '{}'", other)),
        }
    }
}

/// Body of a `POST /api/message/{mode}` request.
///
/// Built fresh for every submission and never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    /// Conversation the prompt belongs to
    pub chat_id: String,
    /// The user's prompt
    pub prompt: String,
    /// Share a generated image with the community feed
    pub is_published: bool,
    /// Route selector; not part of the body
    #[serde(skip)]
    pub mode: ChatMode,
}

impl SubmissionRequest {
    pub fn new(chat_id: impl Into<String>, prompt: impl Into<String>, mode: ChatMode) -> Self {
        Self {
            chat_id: chat_id.into(),
            prompt: prompt.into(),
            is_published: false,
            mode,
        }
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }
}

/// Envelope returned by the message routes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubmitResponse {
    pub success: bool,
    /// Failure reason, present when `success` is false
    #[serde(default)]
    pub message: Option<String>,
    /// The assistant's reply, present when `success` is true
    #[serde(default)]
    pub reply: Option<Message>,
}

/// Envelope returned by `GET /api/user/data`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserDataResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Envelope returned by `GET /api/chat/get`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub chats: Vec<Chat>,
}
