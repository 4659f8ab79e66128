//! Ordered message list for the visible conversation.

use crate::models::Message;

/// Messages of the conversation currently on screen, in append order.
///
/// Only ever appended to or replaced wholesale. Every change bumps
/// `revision`, which the view uses to decide when to scroll to the bottom.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    revision: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }

    /// Replace the whole list with a conversation's persisted history.
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.revision += 1;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Counter bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
