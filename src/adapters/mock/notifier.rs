//! Notifier that records notices for later assertions.

use std::sync::{Arc, Mutex};

use crate::traits::{Notice, Notifier};

/// Collects every notice it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Text of the most recent notice.
    pub fn last_text(&self) -> Option<String> {
        self.notices.lock().unwrap().last().map(|n| n.text.clone())
    }

    pub fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
