use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;

/// A persisted conversation as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Opaque conversation id
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the conversation
    #[serde(default)]
    pub name: String,
    /// Persisted message history, oldest first
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Owner of the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Last modification time, when the backend reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Chat {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            messages: Vec::new(),
            user_id: None,
            updated_at: None,
        }
    }

    /// Replace the message history (builder style).
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Name to show in the header; falls back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
