//! Coarse classification of chat errors.
//!
//! Used to label log lines and to decide whether a failure is something the
//! user can fix from the input box.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No signed-in session.
    Auth,

    /// The user must change something (select a chat, type a prompt, wait).
    User,

    /// The backend answered and refused the request.
    Server,

    /// The request never got a usable HTTP answer.
    Network,

    /// The backend answered with something the client cannot decode.
    Client,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Auth => "auth",
            ErrorCategory::User => "user",
            ErrorCategory::Server => "server",
            ErrorCategory::Network => "network",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Whether the user can resolve the error without leaving the panel.
    pub fn is_user_actionable(&self) -> bool {
        matches!(self, ErrorCategory::Auth | ErrorCategory::User)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
