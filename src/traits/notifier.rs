//! Notification sink abstraction.
//!
//! The chat panel reports outcomes the user should see (login required,
//! backend refusals, network failures) through a [`Notifier`]. The host
//! decides how to surface them: toasts in the TUI, log lines elsewhere.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Sink for transient notices.
pub trait Notifier: Send + Sync {
    /// Surface a notice to the user.
    fn notify(&self, notice: Notice);

    fn info(&self, text: &str) {
        self.notify(Notice::info(text));
    }

    fn error(&self, text: &str) {
        self.notify(Notice::error(text));
    }
}
