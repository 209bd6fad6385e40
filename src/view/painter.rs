//! Per-item draw routines plugged into the page renderer.

use super::constants::GUTTER_WIDTH;
use super::styles::ItemStyles;
use crate::model::EntryKind;
use crate::provider::ItemDescriptor;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Paints one item into its sub-region.
pub trait ItemPainter {
    /// Draw `item` into `area` and return the attribute the cursor
    /// highlight is combined with.
    ///
    /// `area` may be shorter than the item; when `inverted` the item is
    /// clipped at the top, otherwise at the bottom.
    fn draw(
        &self,
        item: &ItemDescriptor<'_>,
        area: Rect,
        buf: &mut Buffer,
        inverted: bool,
    ) -> Option<Style>;
}

/// Painter for listing pages: plain rows, bare gutter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingPainter {
    styles: ItemStyles,
}

impl ListingPainter {
    /// Painter using `styles` for rows.
    pub fn new(styles: ItemStyles) -> Self {
        Self { styles }
    }
}

impl ItemPainter for ListingPainter {
    fn draw(
        &self,
        item: &ItemDescriptor<'_>,
        area: Rect,
        buf: &mut Buffer,
        inverted: bool,
    ) -> Option<Style> {
        paint_rows(&self.styles, item, area, buf, inverted);
        None
    }
}

/// Painter for comment threads: a depth-coloured bar down the gutter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPainter {
    styles: ItemStyles,
}

impl ThreadPainter {
    /// Painter using `styles` for rows and depth bars.
    pub fn new(styles: ItemStyles) -> Self {
        Self { styles }
    }
}

impl ItemPainter for ThreadPainter {
    fn draw(
        &self,
        item: &ItemDescriptor<'_>,
        area: Rect,
        buf: &mut Buffer,
        inverted: bool,
    ) -> Option<Style> {
        paint_rows(&self.styles, item, area, buf, inverted);
        if item.entry.kind == EntryKind::Post || area.width == 0 {
            return None;
        }

        let bar = self.styles.depth_bar(item.entry.depth);
        for y in area.top()..area.bottom() {
            buf.set_string(area.x, y, "│", bar);
        }
        Some(bar)
    }
}

fn paint_rows(
    styles: &ItemStyles,
    item: &ItemDescriptor<'_>,
    area: Rect,
    buf: &mut Buffer,
    inverted: bool,
) {
    let text_width = usize::from(area.width.saturating_sub(GUTTER_WIDTH));
    if text_width == 0 {
        return;
    }
    let height = usize::from(area.height);
    let skip = if inverted {
        item.rows.len().saturating_sub(height)
    } else {
        0
    };

    for (y, row) in (area.top()..area.bottom()).zip(item.rows.iter().skip(skip)) {
        let style = styles.row(row.role, item.entry.likes);
        buf.set_stringn(area.x + GUTTER_WIDTH, y, &row.text, text_width, style);
    }
}
