//! Scroll state for the message viewport
//!
//! Offsets are counted from the bottom: 0 means the newest message is
//! visible. Any change to the message store pins the view back to the
//! bottom.

/// Scroll position of the message viewport
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Lines scrolled up from the bottom (0 = following new content)
    pub offset: u16,
    /// Maximum scroll value (calculated during render)
    pub max_scroll: u16,
    /// True when user manually scrolled
    pub user_has_scrolled: bool,
    /// Store revision the view last followed
    seen_revision: u64,
}

impl ScrollState {
    /// Create a new scroll state
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin to the bottom if the store changed since the last call.
    ///
    /// Returns true when the view jumped.
    pub fn follow(&mut self, revision: u64) -> bool {
        if revision == self.seen_revision {
            return false;
        }
        self.seen_revision = revision;
        self.offset = 0;
        self.user_has_scrolled = false;
        true
    }

    /// Scroll towards older messages.
    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_scroll);
        self.user_has_scrolled = self.offset > 0;
    }

    /// Scroll towards newer messages.
    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
        self.user_has_scrolled = self.offset > 0;
    }

    /// Update the scroll range after a render pass.
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.offset = self.offset.min(max_scroll);
    }

    /// Check if we're at the bottom (following new content)
    pub fn is_at_bottom(&self) -> bool {
        self.offset == 0
    }

    /// Row to pass to `Paragraph::scroll` for content of `total` lines in a
    /// viewport of `height` rows.
    pub fn top_row(&self, total: u16, height: u16) -> u16 {
        total.saturating_sub(height).saturating_sub(self.offset)
    }
}
