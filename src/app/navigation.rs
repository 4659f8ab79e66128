//! Switching between conversations.

use super::App;
use crate::traits::SessionService;

impl App {
    /// Select the conversation after the current one, wrapping around.
    pub fn select_next_chat(&mut self) {
        self.step_chat(1);
    }

    /// Select the conversation before the current one, wrapping around.
    pub fn select_previous_chat(&mut self) {
        self.step_chat(-1);
    }

    fn step_chat(&mut self, step: isize) {
        let chats = self.session.chats();
        if chats.is_empty() {
            return;
        }
        let len = chats.len() as isize;
        let current = self
            .panel
            .conversation_id()
            .and_then(|id| chats.iter().position(|c| c.id == id));

        let index = match current {
            Some(i) => (i as isize + step).rem_euclid(len) as usize,
            None => 0,
        };
        self.session.select_chat(Some(chats[index].clone()));
        if self.panel.poll_conversation() {
            self.mark_dirty();
        }
    }
}
