//! Notifier adapters.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::traits::{Notice, NoticeLevel, Notifier};

/// Number of ticks a toast stays visible by default (ticks are 100ms).
pub const DEFAULT_TOAST_TTL_TICKS: u32 = 40;

/// Maximum number of toasts kept queued.
const MAX_TOASTS: usize = 5;

/// A notice with a remaining lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notice: Notice,
    pub remaining_ticks: u32,
}

/// Notices rendered as short-lived toasts by the TUI.
///
/// The panel pushes from the UI task and the render loop ticks it down, so a
/// plain mutex is enough.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Toast>>,
    ttl_ticks: u32,
}

impl ToastQueue {
    pub fn new(ttl_ticks: u32) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::new()),
            ttl_ticks: ttl_ticks.max(1),
        }
    }

    fn toasts(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The most recent toast still alive.
    pub fn current(&self) -> Option<Toast> {
        self.toasts().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.toasts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts().is_empty()
    }

    /// Advance every toast by one tick and drop the expired ones.
    ///
    /// Returns true if anything was removed.
    pub fn tick(&self) -> bool {
        let mut toasts = self.toasts();
        let before = toasts.len();
        for toast in toasts.iter_mut() {
            toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
        }
        toasts.retain(|t| t.remaining_ticks > 0);
        toasts.len() != before
    }

}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL_TICKS)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!(notice = %notice.text, "notice"),
            NoticeLevel::Error => tracing::warn!(notice = %notice.text, "error notice"),
        }
        let mut toasts = self.toasts();
        if toasts.len() == MAX_TOASTS {
            toasts.pop_front();
        }
        toasts.push_back(Toast {
            notice,
            remaining_ticks: self.ttl_ticks,
        });
    }
}
