//! In-process session state.
//!
//! The TUI owns one [`InMemorySession`] for its whole lifetime and hands
//! `Arc<dyn SessionService>` clones to every view that needs it.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

use crate::models::{Chat, Message, User};
use crate::traits::SessionService;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Session state kept in memory.
#[derive(Debug)]
pub struct InMemorySession {
    user: Mutex<Option<User>>,
    token: Mutex<Option<String>>,
    chats: Mutex<Vec<Chat>>,
    selected: watch::Sender<Option<Chat>>,
}

impl InMemorySession {
    /// Create a signed-out session.
    pub fn new() -> Self {
        let (selected, _) = watch::channel(None);
        Self {
            user: Mutex::new(None),
            token: Mutex::new(None),
            chats: Mutex::new(Vec::new()),
            selected,
        }
    }

    /// Create a session holding an auth token but no user record yet.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        *lock(&session.token) = Some(token.into());
        session
    }

    /// Create a signed-in session.
    pub fn signed_in(user: User, token: impl Into<String>) -> Self {
        let session = Self::with_token(token);
        *lock(&session.user) = Some(user);
        session
    }

    /// Select the conversation with the given id, if known.
    pub fn select_by_id(&self, chat_id: &str) -> bool {
        let chat = lock(&self.chats).iter().find(|c| c.id == chat_id).cloned();
        match chat {
            Some(chat) => {
                self.select_chat(Some(chat));
                true
            }
            None => false,
        }
    }
}

impl Default for InMemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionService for InMemorySession {
    fn current_user(&self) -> Option<User> {
        lock(&self.user).clone()
    }

    fn set_user(&self, user: Option<User>) {
        *lock(&self.user) = user;
    }

    fn update_user(&self, f: &mut dyn FnMut(&mut User)) {
        if let Some(user) = lock(&self.user).as_mut() {
            f(user);
        }
    }

    fn token(&self) -> Option<String> {
        lock(&self.token).clone()
    }

    fn chats(&self) -> Vec<Chat> {
        lock(&self.chats).clone()
    }

    fn set_chats(&self, chats: Vec<Chat>) {
        *lock(&self.chats) = chats;
    }

    fn selected_chat(&self) -> Option<Chat> {
        self.selected.borrow().clone()
    }

    fn select_chat(&self, chat: Option<Chat>) {
        tracing::debug!(
            "Selecting chat {}",
            chat.as_ref().map(|c| c.id.as_str()).unwrap_or("<none>")
        );
        self.selected.send_replace(chat);
    }

    fn subscribe_selection(&self) -> watch::Receiver<Option<Chat>> {
        self.selected.subscribe()
    }

    fn append_to_chat(&self, chat_id: &str, messages: &[Message]) {
        if let Some(chat) = lock(&self.chats).iter_mut().find(|c| c.id == chat_id) {
            chat.messages.extend_from_slice(messages);
        }
        self.selected.send_if_modified(|selected| {
            if let Some(chat) = selected.as_mut().filter(|c| c.id == chat_id) {
                chat.messages.extend_from_slice(messages);
            }
            // Stored copy only; the visible list already shows these.
            false
        });
    }
}
