//! Input area: publish toggle, mode selector, prompt box and status row.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INFO};
use crate::app::App;
use crate::chat::Composer;
use crate::models::ChatMode;
use crate::traits::NoticeLevel;

/// Rows taken by the input area for the given mode.
pub fn input_area_height(mode: ChatMode) -> u16 {
    // prompt box (3) + status row, plus the publish row in image mode
    match mode {
        ChatMode::Text => 4,
        ChatMode::Image => 5,
    }
}

/// "Text | Image" with the active mode highlighted.
pub fn mode_selector_spans(mode: ChatMode) -> Vec<Span<'static>> {
    let styled = |m: ChatMode| {
        if m == mode {
            Span::styled(
                format!(" {} ", m),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            Span::styled(format!(" {} ", m), Style::default().fg(COLOR_DIM))
        }
    };
    vec![styled(ChatMode::Text), Span::raw(" "), styled(ChatMode::Image)]
}

/// Checkbox row for publishing generated images.
pub fn publish_toggle_line(composer: &Composer) -> Line<'static> {
    let mark = if composer.is_published() { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(mark, Style::default().fg(COLOR_ACCENT)),
        Span::raw(" Publish generated image to community"),
        Span::styled("  (Ctrl+P)", Style::default().fg(COLOR_DIM)),
    ])
}

/// Column of the cursor inside the prompt box, after the "> " marker,
/// clamped to the last usable cell.
pub fn cursor_column(prompt: &str, inner_width: u16) -> u16 {
    let typed = u16::try_from(prompt.chars().count()).unwrap_or(u16::MAX);
    typed
        .saturating_add(2)
        .min(inner_width.saturating_sub(1))
}

fn keybind_hints(app: &App) -> Line<'static> {
    let hint = if app.panel.is_busy() {
        "waiting for reply..."
    } else {
        "Enter send · Tab mode · Ctrl+N/B chats · PgUp/PgDn scroll · Esc quit"
    };
    Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM)))
}

fn status_line(app: &App) -> Line<'static> {
    match app.toasts.current() {
        Some(toast) => {
            let color = match toast.notice.level {
                NoticeLevel::Info => COLOR_INFO,
                NoticeLevel::Error => COLOR_ERROR,
            };
            Line::from(Span::styled(toast.notice.text, Style::default().fg(color)))
        }
        None => keybind_hints(app),
    }
}

pub fn render_input_area(frame: &mut Frame, area: Rect, app: &App) {
    let composer = app.panel.composer();
    let image_mode = composer.mode() == ChatMode::Image;

    let mut constraints = Vec::with_capacity(3);
    if image_mode {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut index = 0;
    if image_mode {
        frame.render_widget(Paragraph::new(publish_toggle_line(composer)), chunks[0]);
        index = 1;
    }

    let border_color = if app.panel.is_busy() { COLOR_BORDER } else { COLOR_HEADER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(mode_selector_spans(composer.mode())));

    let prompt_style = if app.panel.is_busy() {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default()
    };
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(COLOR_DIM)),
        Span::styled(composer.prompt().to_string(), prompt_style),
    ]))
    .block(block);
    frame.render_widget(prompt, chunks[index]);

    if !app.panel.is_busy() {
        let inner_width = chunks[index].width.saturating_sub(2);
        frame.set_cursor_position((
            chunks[index].x + 1 + cursor_column(composer.prompt(), inner_width),
            chunks[index].y + 1,
        ));
    }

    frame.render_widget(Paragraph::new(status_line(app)), chunks[index + 1]);
}
