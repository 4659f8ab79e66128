//! AppMessage enum for async communication within the application.

use crate::chat::PendingSubmission;
use crate::error::ChatError;
use crate::models::{Chat, Message, User};

/// Results of background tasks, delivered to the UI loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The request for `pending` finished (successfully or not)
    SubmissionSettled {
        pending: PendingSubmission,
        result: Result<Message, ChatError>,
    },
    /// User record and conversations fetched at startup
    SessionLoaded { user: User, chats: Vec<Chat> },
    /// Session bootstrap failed
    SessionLoadFailed(ChatError),
}
