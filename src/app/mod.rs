//! Application state for the TUI.
//!
//! [`App`] owns the chat panel and everything around it: the toast queue,
//! the scroll position and the channel background tasks report back on.
//! Network calls never run on the UI task; they are spawned and their
//! results come back as [`AppMessage`]s handled by [`App::handle_message`].

mod handlers;
mod messages;
mod navigation;

pub use messages::AppMessage;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::adapters::{InMemorySession, ToastQueue};
use crate::api::MessageApi;
use crate::chat::ChatPanel;
use crate::config::ClientConfig;
use crate::error::ChatError;
use crate::models::User;
use crate::traits::{Notifier, SessionService};
use crate::view_state::ScrollState;

/// Main application state.
pub struct App {
    pub panel: ChatPanel,
    pub toasts: Arc<ToastQueue>,
    pub scroll: ScrollState,
    /// Set while the startup fetch of user and chats runs
    pub loading_session: bool,
    pub should_quit: bool,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Incremented every loop tick, drives the loading animation
    pub tick_count: u64,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    api: Arc<MessageApi>,
    session: Arc<InMemorySession>,
}

impl App {
    pub fn new(config: &ClientConfig, api: Arc<MessageApi>, session: Arc<InMemorySession>) -> Self {
        let toasts = Arc::new(ToastQueue::new(config.toast_ttl_ticks));
        let panel = ChatPanel::new(
            session.clone() as Arc<dyn SessionService>,
            toasts.clone() as Arc<dyn Notifier>,
            config.initial_mode,
        );
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            panel,
            toasts,
            scroll: ScrollState::new(),
            loading_session: false,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            api,
            session,
        }
    }

    pub fn session(&self) -> &Arc<InMemorySession> {
        &self.session
    }

    pub fn user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations and toast lifetimes.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.toasts.tick() || self.panel.is_busy() || self.loading_session {
            self.mark_dirty();
        }
        if self.panel.poll_conversation() {
            self.mark_dirty();
        }
    }

    /// Start a submission of the current prompt.
    ///
    /// Gated submits return without spawning anything; the panel has
    /// already posted any notice. Must run inside a tokio runtime.
    pub fn submit(&mut self) {
        let pending = match self.panel.begin_submit() {
            Ok(pending) => pending,
            Err(_) => return,
        };
        self.mark_dirty();

        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.send(&pending.request, &pending.token).await;
            let _ = tx.send(AppMessage::SubmissionSettled { pending, result });
        });
    }

    /// Fetch the user record and conversations in the background.
    pub fn load_session(&mut self) {
        let Some(token) = self.session.token() else {
            tracing::info!("No session token; starting signed out");
            return;
        };
        self.loading_session = true;

        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match tokio::try_join!(api.fetch_user(&token), api.fetch_chats(&token)) {
                Ok((user, chats)) => AppMessage::SessionLoaded { user, chats },
                Err(err) => AppMessage::SessionLoadFailed(err),
            };
            let _ = tx.send(message);
        });
    }

    /// Apply the result of a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SubmissionSettled { pending, result } => {
                self.panel.finish_submit(pending, result);
            }
            AppMessage::SessionLoaded { user, chats } => {
                self.loading_session = false;
                tracing::info!(
                    user = %user.name,
                    credits = user.credits,
                    chats = chats.len(),
                    "Session loaded"
                );
                let first = chats.first().cloned();
                self.session.set_user(Some(user));
                self.session.set_chats(chats);
                if self.session.selected_chat().is_none() {
                    self.session.select_chat(first);
                }
                self.panel.poll_conversation();
            }
            AppMessage::SessionLoadFailed(err) => {
                self.loading_session = false;
                self.report_load_failure(&err);
            }
        }
        self.mark_dirty();
    }

    fn report_load_failure(&self, err: &ChatError) {
        tracing::warn!(code = err.error_code(), "Session load failed: {}", err);
        let text = err.notice_text().unwrap_or_else(|| err.to_string());
        let mut message = format!("Could not load session: {}", text);
        if err.category().is_user_actionable() {
            message.push_str(" (run `quickchat --login <token>`)");
        }
        self.toasts.error(&message);
    }
}
