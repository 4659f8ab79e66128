//! Prompt input state: draft text, generation mode and publish flag.

use crate::models::ChatMode;

/// State of the prompt input row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    prompt: String,
    mode: ChatMode,
    is_published: bool,
}

impl Composer {
    pub fn new(mode: ChatMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.prompt.push(c);
    }

    pub fn insert_str(&mut self, s: &str) {
        // Single-line input: pasted newlines become spaces.
        self.prompt
            .extend(s.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
    }

    pub fn backspace(&mut self) {
        self.prompt.pop();
    }

    pub fn clear(&mut self) {
        self.prompt.clear();
    }

    /// Whether the prompt passes the required-field check.
    ///
    /// Only an empty string fails; whitespace counts as input.
    pub fn has_prompt(&self) -> bool {
        !self.prompt.is_empty()
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Publish flag sent with the request.
    ///
    /// The toggle is only offered in image mode, but the flag is sent as-is
    /// in both modes.
    pub fn is_published(&self) -> bool {
        self.is_published
    }

    pub fn set_published(&mut self, is_published: bool) {
        self.is_published = is_published;
    }

    /// Flip the publish flag. Ignored outside image mode, where the toggle
    /// is not shown.
    pub fn toggle_published(&mut self) -> bool {
        if self.mode == ChatMode::Image {
            self.is_published = !self.is_published;
            true
        } else {
            false
        }
    }
}
