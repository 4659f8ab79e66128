//! Message list rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ASSISTANT, COLOR_DIM, COLOR_IMAGE, COLOR_USER};
use crate::app::App;
use crate::models::{Message, MessageRole};

/// Text shown while the conversation is empty.
pub const EMPTY_BANNER: &str = "Ask me anything.";

/// Three-dot loader; one more dot every few ticks.
pub fn loading_dots(tick: u64) -> &'static str {
    match (tick / 3) % 3 {
        0 => ".",
        1 => "..",
        _ => "...",
    }
}

/// Lines for one message: a label row, the body, then a blank spacer.
pub fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let label_color = match message.role {
        MessageRole::User => COLOR_USER,
        MessageRole::Assistant => COLOR_ASSISTANT,
    };

    let mut header = vec![Span::styled(
        message.role.label(),
        Style::default().fg(label_color).add_modifier(Modifier::BOLD),
    )];
    if let Some(at) = message.created_at() {
        header.push(Span::styled(
            format!("  {}", at.with_timezone(&chrono::Local).format("%H:%M")),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let mut lines = vec![Line::from(header)];
    if message.is_image {
        let mut body = vec![
            Span::styled("[image] ", Style::default().fg(COLOR_IMAGE)),
            Span::raw(message.content.clone()),
        ];
        if message.is_published {
            body.push(Span::styled(" (published)", Style::default().fg(COLOR_DIM)));
        }
        lines.push(Line::from(body));
    } else {
        lines.extend(message.content.lines().map(|l| Line::from(l.to_string())));
    }
    lines.push(Line::default());
    lines
}

/// Rows `lines` occupy once wrapped to `viewport_width` columns.
pub fn estimate_wrapped_line_count(lines: &[Line], viewport_width: usize) -> usize {
    if viewport_width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| {
            let chars: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            chars.div_ceil(viewport_width).max(1)
        })
        .sum()
}

/// Render the conversation, keeping the viewport pinned to the bottom
/// after every store change.
pub fn render_messages(frame: &mut Frame, area: Rect, app: &mut App) {
    app.scroll.follow(app.panel.store().revision());

    if app.panel.messages().is_empty() && !app.panel.is_busy() {
        let banner = Paragraph::new(Line::from(Span::styled(
            EMPTY_BANNER,
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )))
        .centered();
        let y = area.y + area.height / 2;
        frame.render_widget(banner, Rect::new(area.x, y, area.width, 1.min(area.height)));
        app.scroll.set_max_scroll(0);
        return;
    }

    let mut lines: Vec<Line> = app.panel.messages().iter().flat_map(message_lines).collect();
    if app.panel.is_busy() {
        lines.push(Line::from(Span::styled(
            loading_dots(app.tick_count),
            Style::default().fg(COLOR_ASSISTANT),
        )));
    }

    let total = estimate_wrapped_line_count(&lines, area.width as usize);
    let total = u16::try_from(total).unwrap_or(u16::MAX);
    app.scroll.set_max_scroll(total.saturating_sub(area.height));
    let top = app.scroll.top_row(total, area.height);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((top, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_dots_cycle() {
        assert_eq!(loading_dots(0), ".");
        assert_eq!(loading_dots(3), "..");
        assert_eq!(loading_dots(6), "...");
        assert_eq!(loading_dots(9), ".");
    }

    #[test]
    fn test_image_message_has_marker() {
        let mut msg = Message::assistant("https://img.test/cat.png");
        msg.is_image = true;
        msg.is_published = true;
        let lines = message_lines(&msg);
        let body: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(body, "[image] https://img.test/cat.png (published)");
    }

    #[test]
    fn test_multiline_text_message() {
        let msg = Message::assistant("a\nb");
        // label, two body lines, spacer
        assert_eq!(message_lines(&msg).len(), 4);
    }

    #[test]
    fn test_estimate_wrapped_line_count() {
        let lines = vec![Line::from("abcdefghij"), Line::default()];
        assert_eq!(estimate_wrapped_line_count(&lines, 4), 4);
        assert_eq!(estimate_wrapped_line_count(&lines, 0), 2);
        assert_eq!(estimate_wrapped_line_count(&[], 80), 0);
    }
}
