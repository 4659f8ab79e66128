//! UI rendering for the chat panel.
//!
//! Layout, top to bottom: header (user, credits, conversation), message
//! list, input area.

pub mod input;
pub mod messages;
mod theme;

pub use messages::{estimate_wrapped_line_count, loading_dots, EMPTY_BANNER};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INFO};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::traits::SessionService;
use input::{input_area_height, render_input_area};
use messages::render_messages;
use theme::COLOR_CREDITS;

/// Draw the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let mode = app.panel.composer().mode();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(input_area_height(mode)),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_messages(frame, chunks[1], app);
    render_input_area(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "quickchat",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];

    match app.user() {
        Some(user) => {
            spans.push(Span::styled(format!("  {}", user.name), Style::default().fg(COLOR_ACCENT)));
            spans.push(Span::styled(
                format!("  Credits: {}", user.credits),
                Style::default().fg(COLOR_CREDITS),
            ));
        }
        None if app.loading_session => {
            spans.push(Span::styled("  signing in...", Style::default().fg(COLOR_DIM)));
        }
        None => {
            spans.push(Span::styled("  not signed in", Style::default().fg(COLOR_DIM)));
        }
    }

    if let Some(chat) = app.session().selected_chat() {
        spans.push(Span::styled(
            format!("  # {}", chat.display_name()),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}
