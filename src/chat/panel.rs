//! Submission controller and conversation sync for the chat panel.
//!
//! A submit is split around its single suspension point:
//!
//! 1. [`ChatPanel::begin_submit`] runs the precondition gates, flips the
//!    panel to `Submitting`, appends the optimistic user message, clears the
//!    input and hands back a [`PendingSubmission`].
//! 2. The caller sends `pending.request` (see [`MessageApi::send`]).
//! 3. [`ChatPanel::finish_submit`] reconciles the single result and always
//!    returns the panel to `Idle`.
//!
//! [`ChatPanel::submit`] chains the three for callers that can hold the
//! panel across the await. The TUI instead runs step 2 on a spawned task and
//! feeds the result back through its message channel.

use std::sync::Arc;
use tokio::sync::watch;

use super::composer::Composer;
use super::store::MessageStore;
use crate::api::MessageApi;
use crate::error::{ChatError, ChatResult};
use crate::models::{Chat, ChatMode, Message, SubmissionRequest};
use crate::traits::{Notifier, SessionService};

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// How a settled submission was reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Reply appended to the visible list, credits debited.
    Confirmed,
    /// Reply belongs to a conversation that is no longer displayed. Credits
    /// were debited and the session copy updated; the visible list is left
    /// alone.
    ConfirmedElsewhere,
    /// Backend answered `success: false`; draft restored.
    Rejected,
    /// Transport or decode failure.
    Failed,
}

/// A submission that has been started and awaits its one result.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    /// Body and route of the outbound request
    pub request: SubmissionRequest,
    /// Session token to send in `Authorization`
    pub token: String,
    /// Prompt as it was before the input was cleared
    prompt_copy: String,
    /// The optimistic message appended by `begin_submit`
    user_message: Message,
    /// Store revision right after the optimistic append
    store_revision: u64,
}

impl PendingSubmission {
    pub fn mode(&self) -> ChatMode {
        self.request.mode
    }

    pub fn chat_id(&self) -> &str {
        &self.request.chat_id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt_copy
    }

    pub fn user_message(&self) -> &Message {
        &self.user_message
    }
}

/// View state and submit logic of the chat panel.
pub struct ChatPanel {
    store: MessageStore,
    composer: Composer,
    state: SubmissionState,
    /// Conversation whose messages are in `store`
    conversation_id: Option<String>,
    session: Arc<dyn SessionService>,
    notifier: Arc<dyn Notifier>,
    selection: watch::Receiver<Option<Chat>>,
}

impl ChatPanel {
    /// Create a panel showing the session's current selection.
    pub fn new(
        session: Arc<dyn SessionService>,
        notifier: Arc<dyn Notifier>,
        mode: ChatMode,
    ) -> Self {
        let mut selection = session.subscribe_selection();
        let current = selection.borrow_and_update().clone();

        let mut panel = Self {
            store: MessageStore::new(),
            composer: Composer::new(mode),
            state: SubmissionState::Idle,
            conversation_id: None,
            session,
            notifier,
            selection,
        };
        panel.sync_conversation(current.as_ref());
        panel
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// True while a submission is in flight; the submit key is ignored then.
    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn session(&self) -> &Arc<dyn SessionService> {
        &self.session
    }

    /// Surface `err` if it has a notice and hand it back.
    fn reject(&self, err: ChatError) -> ChatError {
        tracing::debug!(code = err.error_code(), "Submit rejected: {}", err);
        if let Some(text) = err.notice_text() {
            match err {
                ChatError::NotAuthenticated => self.notifier.info(&text),
                _ => self.notifier.error(&text),
            }
        }
        err
    }

    /// Start a submission of the composer's current prompt.
    ///
    /// On error nothing has been mutated and no request must be sent.
    pub fn begin_submit(&mut self) -> ChatResult<PendingSubmission> {
        if self.is_busy() {
            return Err(self.reject(ChatError::Busy));
        }
        if !self.composer.has_prompt() {
            return Err(self.reject(ChatError::EmptyPrompt));
        }
        let token = match (self.session.current_user(), self.session.token()) {
            (Some(_), Some(token)) => token,
            _ => return Err(self.reject(ChatError::NotAuthenticated)),
        };
        let chat_id = match self.conversation_id.clone() {
            Some(id) => id,
            None => return Err(self.reject(ChatError::NoConversationSelected)),
        };

        self.state = SubmissionState::Submitting;

        let prompt_copy = self.composer.prompt().to_string();
        let user_message = Message::user_prompt(prompt_copy.clone());
        self.store.append(user_message.clone());
        let store_revision = self.store.revision();
        self.composer.clear();

        let request = SubmissionRequest::new(chat_id, prompt_copy.clone(), self.composer.mode())
            .with_published(self.composer.is_published());

        tracing::debug!(
            chat_id = %request.chat_id,
            mode = request.mode.as_str(),
            "Submission started"
        );

        Ok(PendingSubmission {
            request,
            token,
            prompt_copy,
            user_message,
            store_revision,
        })
    }

    /// Reconcile the result of a submission started by `begin_submit`.
    ///
    /// The optimistic user message is kept on every path.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        result: ChatResult<Message>,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(reply) => {
                let cost = pending.mode().credit_cost();
                self.session
                    .append_to_chat(pending.chat_id(), &[pending.user_message().clone(), reply.clone()]);
                self.session.debit_credits(cost);
                self.composer.clear();

                if self.conversation_id.as_deref() == Some(pending.chat_id()) {
                    // The list was reloaded from a copy without the prompt.
                    if self.store.revision() != pending.store_revision {
                        self.store.append(pending.user_message().clone());
                    }
                    self.store.append(reply);
                    tracing::info!(chat_id = %pending.chat_id(), cost, "Reply received");
                    SubmitOutcome::Confirmed
                } else {
                    tracing::info!(
                        chat_id = %pending.chat_id(),
                        cost,
                        "Reply received for a conversation that is no longer displayed"
                    );
                    SubmitOutcome::ConfirmedElsewhere
                }
            }
            Err(err @ ChatError::Logical { .. }) => {
                tracing::warn!(code = err.error_code(), "Submission refused: {}", err);
                self.notifier.error(&err.to_string());
                self.composer.set_prompt(pending.prompt_copy);
                SubmitOutcome::Rejected
            }
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    "Submission failed: {}",
                    err
                );
                self.notifier.error(&err.to_string());
                self.composer.clear();
                SubmitOutcome::Failed
            }
        };

        self.state = SubmissionState::Idle;
        outcome
    }

    /// Send the composer's prompt and reconcile the answer.
    ///
    /// Returns `Err` only when a precondition gate stopped the submit before
    /// anything was sent.
    pub async fn submit(&mut self, api: &MessageApi) -> ChatResult<SubmitOutcome> {
        let pending = self.begin_submit()?;
        let result = api.send(&pending.request, &pending.token).await;
        Ok(self.finish_submit(pending, result))
    }

    /// Show `chat`'s persisted messages, discarding whatever was displayed.
    ///
    /// `None` leaves the panel untouched. Returns whether the list changed.
    pub fn sync_conversation(&mut self, chat: Option<&Chat>) -> bool {
        let Some(chat) = chat else {
            return false;
        };
        tracing::debug!(
            chat_id = %chat.id,
            messages = chat.messages.len(),
            "Syncing conversation"
        );
        self.store.replace(chat.messages.clone());
        self.conversation_id = Some(chat.id.clone());
        true
    }

    /// Apply a pending selection change from the session, if any.
    pub fn poll_conversation(&mut self) -> bool {
        if !self.selection.has_changed().unwrap_or(false) {
            return false;
        }
        let chat = self.selection.borrow_and_update().clone();
        self.sync_conversation(chat.as_ref())
    }
}
