//! Session service abstraction.
//!
//! Holds everything the chat panel needs to know about the signed-in user:
//! the user record (credits included), the auth token, the conversations
//! and which of them is selected. Selection changes are published on a
//! `tokio::sync::watch` channel so views can follow them.

use tokio::sync::watch;

use crate::models::{Chat, Message, User};

/// Shared session state with explicit read, subscribe and mutate operations.
pub trait SessionService: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Replace the user record (sign-in, sign-out, refresh).
    fn set_user(&self, user: Option<User>);

    /// Apply a mutation to the user record. No-op when signed out.
    fn update_user(&self, f: &mut dyn FnMut(&mut User));

    /// Token sent verbatim in the `Authorization` header.
    fn token(&self) -> Option<String>;

    /// All conversations of the signed-in user.
    fn chats(&self) -> Vec<Chat>;

    /// Replace the conversation list.
    fn set_chats(&self, chats: Vec<Chat>);

    /// The currently selected conversation.
    fn selected_chat(&self) -> Option<Chat>;

    /// Select a conversation (or none). Subscribers are notified.
    fn select_chat(&self, chat: Option<Chat>);

    /// Receiver that observes every selection change.
    fn subscribe_selection(&self) -> watch::Receiver<Option<Chat>>;

    /// Record messages the backend has persisted for `chat_id`.
    ///
    /// Updates the stored copy only; selection subscribers are not notified.
    fn append_to_chat(&self, chat_id: &str, messages: &[Message]);

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Subtract `cost` credits from the signed-in user.
    fn debit_credits(&self, cost: i64) {
        self.update_user(&mut |user| user.debit(cost));
    }
}
