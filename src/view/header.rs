//! Header bar: page title on the left, selection on the right.

use super::styles::HEADER_BAR;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

/// One-row header widget.
#[derive(Debug, Clone)]
pub struct HeaderBar<'a> {
    title: &'a str,
    status: String,
}

impl<'a> HeaderBar<'a> {
    /// Header for a page titled `title` with `selected` as the selected
    /// provider index, if any.
    pub fn new(title: &'a str, selected: Option<usize>) -> Self {
        let status = selected.map_or_else(String::new, |index| format!("#{}", index + 1));
        Self { title, status }
    }

    /// Right-hand status text.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, HEADER_BAR);

        let status_width = u16::try_from(self.status.width()).unwrap_or(u16::MAX);
        let title_width = area.width.saturating_sub(status_width.saturating_add(3));
        buf.set_stringn(
            area.x + 1,
            area.y,
            self.title,
            usize::from(title_width),
            HEADER_BAR,
        );

        if !self.status.is_empty() && status_width < area.width {
            let x = area.right().saturating_sub(status_width + 1).max(area.x);
            buf.set_string(x, area.y, &self.status, HEADER_BAR);
        }
    }
}
