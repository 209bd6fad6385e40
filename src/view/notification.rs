//! Notification popup: a few lines of text in a centered box.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Box just large enough for `lines`, centered in `area` and clipped to it.
pub fn notification_rect(lines: &[String], area: Rect) -> Rect {
    let longest = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let width = u16::try_from(longest)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render `lines` in a bordered popup centered in `area`.
pub fn render_notification(frame: &mut Frame, area: Rect, lines: &[String]) {
    let popup_area = notification_rect(lines, area);
    frame.render_widget(Clear, popup_area);

    let text: Vec<Line> = lines.iter().map(|line| Line::from(line.as_str())).collect();
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, popup_area);
}
