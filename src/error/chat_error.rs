//! Errors produced while sending a message or loading the session.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Notice shown when a signed-out user tries to send a message.
pub const LOGIN_REQUIRED_NOTICE: &str = "Login to send message";

/// Fallback when the backend refuses a request without saying why.
const DEFAULT_REFUSAL: &str = "Request failed";

/// Everything that can go wrong between a submit and its reconciliation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChatError {
    /// No signed-in user; nothing was sent or changed.
    #[error("{}", LOGIN_REQUIRED_NOTICE)]
    NotAuthenticated,

    /// No conversation selected; nothing was sent or changed.
    #[error("Select a chat to send message")]
    NoConversationSelected,

    /// The prompt was empty after trimming.
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// A submission is already in flight for this panel.
    #[error("A message is already being sent")]
    Busy,

    /// The backend answered `success: false`.
    #[error("{message}")]
    Logical { message: String },

    /// The request failed before a usable answer arrived.
    #[error("{0}")]
    Transport(#[from] HttpError),

    /// The answer could not be decoded.
    #[error("Invalid response from server: {message}")]
    Decode { message: String },
}

impl ChatError {
    /// Build a logical failure from the backend's optional message.
    pub fn logical(message: Option<String>) -> Self {
        ChatError::Logical {
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REFUSAL.to_string()),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ChatError::Decode {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ChatError::NotAuthenticated => ErrorCategory::Auth,
            ChatError::NoConversationSelected | ChatError::EmptyPrompt | ChatError::Busy => {
                ErrorCategory::User
            }
            ChatError::Logical { .. } => ErrorCategory::Server,
            ChatError::Transport(err) if err.is_network() => ErrorCategory::Network,
            ChatError::Transport(HttpError::ServerError { status, .. }) if *status == 401 => {
                ErrorCategory::Auth
            }
            ChatError::Transport(HttpError::InvalidUrl(_)) => ErrorCategory::Configuration,
            ChatError::Transport(_) => ErrorCategory::Server,
            ChatError::Decode { .. } => ErrorCategory::Client,
        }
    }

    /// Text for the user-visible notice, or `None` when the error is silent.
    ///
    /// An empty prompt and a double submit are swallowed the same way a
    /// disabled submit button swallows a click.
    pub fn notice_text(&self) -> Option<String> {
        match self {
            ChatError::EmptyPrompt | ChatError::Busy => None,
            other => Some(other.to_string()),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChatError::NotAuthenticated => "NOT_AUTHENTICATED",
            ChatError::NoConversationSelected => "NO_CONVERSATION",
            ChatError::EmptyPrompt => "EMPTY_PROMPT",
            ChatError::Busy => "BUSY",
            ChatError::Logical { .. } => "LOGICAL_FAILURE",
            ChatError::Transport(_) => "TRANSPORT_FAILURE",
            ChatError::Decode { .. } => "DECODE_FAILURE",
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::decode(err.to_string())
    }
}
