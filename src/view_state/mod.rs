//! View-only state that the renderer reads but the chat logic never touches.

mod scroll_state;

pub use scroll_state::ScrollState;
