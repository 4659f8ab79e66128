//! Common test utilities for integration tests.
//!
//! Fixtures for users, conversations and backend reply bodies, plus a
//! helper that wires a [`ChatPanel`] to a real reqwest client pointed at a
//! wiremock server.

#![allow(dead_code)]

use std::sync::Arc;

use quickchat::adapters::mock::RecordingNotifier;
use quickchat::adapters::{InMemorySession, ReqwestHttpClient};
use quickchat::api::MessageApi;
use quickchat::chat::ChatPanel;
use quickchat::models::{Chat, ChatMode, Message, MessageRole, User};
use quickchat::traits::{Notifier, SessionService};
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-session-token";

pub fn alice() -> User {
    User::new("user-alice", "alice", 10)
}

pub fn bob() -> User {
    User::new("user-bob", "bob", 25)
}

/// A persisted message as the backend would have stored it.
pub fn stored(role: MessageRole, content: &str, timestamp: i64) -> Message {
    let mut message = match role {
        MessageRole::User => Message::user_prompt(content),
        MessageRole::Assistant => Message::assistant(content),
    };
    message.timestamp = timestamp;
    message
}

/// Conversation "chat-a" with two persisted messages.
pub fn chat_a() -> Chat {
    Chat::new("chat-a", "Conversation A").with_messages(vec![
        stored(MessageRole::User, "earlier question", 1_700_000_000_000),
        stored(MessageRole::Assistant, "earlier answer", 1_700_000_001_000),
    ])
}

/// Conversation "chat-b" with one persisted message.
pub fn chat_b() -> Chat {
    Chat::new("chat-b", "Conversation B").with_messages(vec![stored(
        MessageRole::Assistant,
        "hello from B",
        1_700_000_002_000,
    )])
}

pub fn text_reply_body(content: &str) -> Value {
    json!({
        "success": true,
        "reply": {
            "role": "assistant",
            "content": content,
            "timestamp": 1_700_000_100_000i64,
            "isImage": false
        }
    })
}

pub fn image_reply_body(url: &str) -> Value {
    json!({
        "success": true,
        "reply": {
            "role": "assistant",
            "content": url,
            "timestamp": 1_700_000_100_000i64,
            "isImage": true,
            "isPublished": true
        }
    })
}

pub fn failure_body(message: &str) -> Value {
    json!({"success": false, "message": message})
}

/// Signed-in session with chat A and chat B, chat A selected.
pub fn session_for(user: User) -> Arc<InMemorySession> {
    let session = InMemorySession::signed_in(user, TEST_TOKEN);
    session.set_chats(vec![chat_a(), chat_b()]);
    session.select_by_id("chat-a");
    Arc::new(session)
}

/// Everything a test needs to drive one panel.
pub struct Harness {
    pub panel: ChatPanel,
    pub session: Arc<InMemorySession>,
    pub notifier: RecordingNotifier,
    pub api: MessageApi,
}

impl Harness {
    pub fn new(base_url: &str, session: Arc<InMemorySession>, mode: ChatMode) -> Self {
        let notifier = RecordingNotifier::new();
        let panel = ChatPanel::new(
            session.clone() as Arc<dyn SessionService>,
            Arc::new(notifier.clone()) as Arc<dyn Notifier>,
            mode,
        );
        let api = MessageApi::new(base_url, Arc::new(ReqwestHttpClient::new()));
        Self {
            panel,
            session,
            notifier,
            api,
        }
    }

    pub fn credits(&self) -> Option<i64> {
        self.session.current_user().map(|u| u.credits)
    }
}
