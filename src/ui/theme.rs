//! Color theme constants for the quickchat UI.

use ratatui::style::Color;

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights: selected mode, header name
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Label of the user's own messages
pub const COLOR_USER: Color = Color::Cyan;

/// Label of assistant replies
pub const COLOR_ASSISTANT: Color = Color::Rgb(4, 181, 117);

/// Image markers
pub const COLOR_IMAGE: Color = Color::Magenta;

/// Credit balance in the header
pub const COLOR_CREDITS: Color = Color::Yellow;

/// Info toasts
pub const COLOR_INFO: Color = Color::LightBlue;

/// Error toasts
pub const COLOR_ERROR: Color = Color::Red;
