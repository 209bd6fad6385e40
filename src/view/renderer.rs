//! Page renderer: lays a window of lazily-produced items into the content area.
//!
//! Every pass starts from a cleared area and rebuilds the list of
//! [`VisibleRegion`]s from scratch. Nothing is cached between frames, so a
//! resize needs no invalidation; the next pass simply sees a new area.

use super::constants::{GUTTER_WIDTH, MIN_CONTENT_HEIGHT, MIN_WIDTH, WRAP_MARGIN};
use super::painter::ItemPainter;
use crate::provider::ContentProvider;
use crate::state::Navigator;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Widget},
};
use tracing::debug;

/// Size of a drawing area in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Height in rows.
    pub rows: u16,
    /// Width in columns.
    pub cols: u16,
}

impl Viewport {
    /// Smallest content area the renderer lays items into.
    pub const MIN: Self = Self {
        rows: MIN_CONTENT_HEIGHT,
        cols: MIN_WIDTH,
    };

    /// Viewport of an area.
    pub fn of(area: Rect) -> Self {
        Self {
            rows: area.height,
            cols: area.width,
        }
    }

    /// Whether `other` is at least this large in both dimensions.
    pub fn fits(self, other: Self) -> bool {
        other.rows >= self.rows && other.cols >= self.cols
    }
}

/// One item's slice of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRegion {
    /// Cells the item was drawn into.
    pub area: Rect,
    /// Attribute the painter asked the cursor highlight to combine with.
    pub attr: Option<Style>,
}

/// Rectangle of `rows` rows starting at `row`, indented by `col`, clipped
/// to `parent`.
pub fn sub_region(parent: Rect, row: u16, col: u16, rows: u16) -> Rect {
    let col = col.min(parent.width);
    let row = row.min(parent.height);
    Rect::new(
        parent.x + col,
        parent.y + row,
        parent.width - col,
        rows,
    )
    .intersection(parent)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fill {
    /// The area ran out of rows.
    Full,
    /// The item sequence ended first.
    Exhausted,
}

/// Lays out items for one page and remembers where they went.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    regions: Vec<VisibleRegion>,
    min: Viewport,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    /// Renderer with the default minimum content area.
    pub fn new() -> Self {
        Self::with_minimum(Viewport::MIN)
    }

    /// Renderer that refuses areas smaller than `min`.
    pub fn with_minimum(min: Viewport) -> Self {
        Self {
            regions: Vec::new(),
            min,
        }
    }

    /// Regions drawn by the last pass, in layout order.
    pub fn regions(&self) -> &[VisibleRegion] {
        &self.regions
    }

    /// Number of items the last pass fit on screen.
    pub fn visible_count(&self) -> usize {
        self.regions.len()
    }

    /// Forget the last pass.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Draw the window `nav` describes into `area` and return the number of
    /// visible items.
    ///
    /// May re-anchor `nav`: once if the selection no longer fits (the area
    /// shrank), and once if an inverted layout ran out of items before
    /// filling the area. An area below the minimum draws nothing.
    pub fn render<C, D>(
        &mut self,
        nav: &mut Navigator,
        area: Rect,
        buf: &mut Buffer,
        content: &C,
        painter: &D,
    ) -> usize
    where
        C: ContentProvider + ?Sized,
        D: ItemPainter + ?Sized,
    {
        self.regions.clear();
        if !self.min.fits(Viewport::of(area)) {
            debug!(?area, "Content area below minimum, skipping render");
            return 0;
        }

        let mut fill = self.layout(nav, area, buf, content, painter);

        if nav.absolute_index().is_some()
            && !self.regions.is_empty()
            && nav.cursor() >= self.regions.len()
        {
            debug!(cursor = nav.cursor(), visible = self.regions.len(), "Cursor off screen");
            nav.anchor_at_selection();
            fill = self.layout(nav, area, buf, content, painter);
        }

        if fill == Fill::Exhausted && nav.is_inverted() {
            debug!(visible = self.regions.len(), "Inverted page under-filled");
            nav.correct_underfill(self.regions.len());
            self.layout(nav, area, buf, content, painter);
        }

        self.regions.len()
    }

    fn layout<C, D>(
        &mut self,
        nav: &Navigator,
        area: Rect,
        buf: &mut Buffer,
        content: &C,
        painter: &D,
    ) -> Fill
    where
        C: ContentProvider + ?Sized,
        D: ItemPainter + ?Sized,
    {
        self.regions.clear();
        Clear.render(area, buf);

        let inverted = nav.is_inverted();
        let max_width = area.width.saturating_sub(WRAP_MARGIN);
        let mut remaining = area.height;

        for item in content.iterate(nav.page_index(), nav.step(), max_width) {
            let rows = remaining.min(item.render_height);
            let top = if inverted {
                remaining - rows
            } else {
                area.height - remaining
            };
            let region = sub_region(area, top, item.offset, rows);
            let attr = painter.draw(&item, region, buf, inverted);
            self.regions.push(VisibleRegion { area: region, attr });

            remaining = remaining.saturating_sub(rows.saturating_add(1));
            if remaining == 0 {
                return Fill::Full;
            }
        }
        Fill::Exhausted
    }

    /// Reverse the gutter of the selected item.
    ///
    /// Does nothing when nothing is selected or the selection has no region.
    pub fn highlight_cursor(&self, nav: &Navigator, buf: &mut Buffer) {
        if nav.absolute_index().is_none() {
            return;
        }
        let Some(region) = self.regions.get(nav.cursor()) else {
            return;
        };

        let style = region
            .attr
            .unwrap_or_default()
            .add_modifier(Modifier::REVERSED);
        let gutter = Rect {
            width: region.area.width.min(GUTTER_WIDTH),
            ..region.area
        };
        buf.set_style(gutter, style);
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
