//! Keyboard and paste handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

/// Lines moved per PageUp / PageDown.
const PAGE_LINES: u16 = 10;

impl App {
    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.select_next_chat(),
            KeyCode::Char('b') if ctrl => self.select_previous_chat(),
            KeyCode::Char('p') if ctrl => {
                self.panel.composer_mut().toggle_published();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.panel.composer_mut().toggle_mode(),
            KeyCode::PageUp => self.scroll.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.scroll.scroll_down(PAGE_LINES),
            KeyCode::Backspace => self.panel.composer_mut().backspace(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.panel.composer_mut().insert_char(c);
            }
            _ => {}
        }
    }

    /// Insert bracketed-paste text into the input.
    pub fn handle_paste(&mut self, text: &str) {
        self.panel.composer_mut().insert_str(text);
        self.mark_dirty();
    }
}
