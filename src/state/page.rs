//! Page state shared by every page type, and the base key bindings.
//!
//! A page is a content provider viewed through a [`Navigator`] and drawn by
//! a [`PageRenderer`]. Page types add their own bindings on top of
//! [`base_keymap`] and pick the painter their items are drawn with.

use super::dispatch::{Binding, KeyMap, Outcome};
use super::navigator::{MoveOutcome, Navigator};
use crate::model::{Direction, VoteDirection, VoteState};
use crate::provider::{ContentProvider, IndexProbe};
use crate::view::painter::ItemPainter;
use crate::view::renderer::PageRenderer;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

/// Popup drawn over the page; the next key press dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Keyboard shortcuts.
    Help,
    /// Short message lines.
    Notification(Vec<String>),
}

/// Content, position, layout and pending feedback of one page.
#[derive(Debug)]
pub struct PageState<C> {
    content: C,
    nav: Navigator,
    renderer: PageRenderer,
    overlay: Option<Overlay>,
    bell: bool,
}

impl<C: ContentProvider> PageState<C> {
    /// Page over `content` at the position `nav` holds.
    pub fn new(content: C, nav: Navigator) -> Self {
        Self {
            content,
            nav,
            renderer: PageRenderer::new(),
            overlay: None,
            bell: false,
        }
    }

    /// Start with the first item selected, or with nothing selected when
    /// the content is empty.
    pub fn at_first_item(content: C) -> Self {
        let nav = if content.is_valid(0) {
            Navigator::default()
        } else {
            Navigator::unpositioned()
        };
        Self::new(content, nav)
    }

    /// The page's items.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// The page's items, for votes and toggles.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Cursor position.
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Layout of the last render.
    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    /// Consume the state, keeping its content.
    pub fn into_content(self) -> C {
        self.content
    }

    /// Swap in new content and position, dropping the old layout.
    pub fn replace(&mut self, content: C, nav: Navigator) {
        self.content = content;
        self.nav = nav;
        self.renderer.clear();
    }

    /// Forget the last layout, as when the screen is too small to draw.
    pub fn clear_layout(&mut self) {
        self.renderer.clear();
    }

    /// Replace the position, keeping the content.
    pub fn reset_navigator(&mut self, nav: Navigator) {
        self.nav = nav;
    }

    /// Move the cursor against the layout of the last render.
    ///
    /// Rings the bell when the move is rejected, including when nothing is
    /// on screen to move across.
    pub fn move_cursor(&mut self, direction: Direction) -> MoveOutcome {
        let visible = self.renderer.visible_count();
        if visible == 0 {
            debug!(?direction, "Move with nothing on screen");
            self.ring();
            return MoveOutcome {
                valid: false,
                redraw: false,
            };
        }

        let outcome = self.nav.move_cursor(direction, visible, &self.content);
        if !outcome.valid {
            self.ring();
        }
        outcome
    }

    /// Vote on the selected item, including the header slot.
    pub fn vote(&mut self, direction: VoteDirection) -> Option<VoteState> {
        let index = self.nav.selected_index();
        match self.content.vote(index, direction) {
            Ok(Some(likes)) => {
                debug!(index, ?likes, "Vote applied");
                Some(likes)
            }
            Ok(None) | Err(_) => {
                self.ring();
                None
            }
        }
    }

    /// Lay the page out into `area`; see [`PageRenderer::render`].
    pub fn render<D>(&mut self, area: Rect, buf: &mut Buffer, painter: &D) -> usize
    where
        D: ItemPainter + ?Sized,
    {
        self.renderer
            .render(&mut self.nav, area, buf, &self.content, painter)
    }

    /// Highlight the selection drawn by the last render.
    pub fn highlight(&self, buf: &mut Buffer) {
        self.renderer.highlight_cursor(&self.nav, buf);
    }
}

impl<C> PageState<C> {
    /// Request a bell.
    pub fn ring(&mut self) {
        self.bell = true;
    }

    /// Take the pending bell request, if any.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    /// Popup currently shown, if any.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Show `overlay` until the next key press.
    pub fn show(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    /// Show a notification popup.
    pub fn notify<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.show(Overlay::Notification(
            lines.into_iter().map(Into::into).collect(),
        ));
    }

    /// Close the overlay; returns whether one was shown.
    pub fn dismiss_overlay(&mut self) -> bool {
        self.overlay.take().is_some()
    }
}

/// A page type: state plus the painter its items are drawn with.
pub trait Page {
    /// Items the page shows.
    type Content: ContentProvider;
    /// Draw routine for those items.
    type Painter: ItemPainter;

    /// Shared page state.
    fn state(&self) -> &PageState<Self::Content>;

    /// Shared page state, mutably.
    fn state_mut(&mut self) -> &mut PageState<Self::Content>;

    /// Painter for the next render.
    fn painter(&self) -> Self::Painter;

    /// Header bar title.
    fn title(&self) -> &str {
        self.state().content().name()
    }
}

fn quit<P: Page>(_page: &mut P, _key: KeyEvent) -> Outcome {
    Outcome::Quit
}

fn help<P: Page>(page: &mut P, _key: KeyEvent) -> Outcome {
    page.state_mut().show(Overlay::Help);
    Outcome::Continue
}

fn move_up<P: Page>(page: &mut P, _key: KeyEvent) -> Outcome {
    page.state_mut().move_cursor(Direction::Up);
    Outcome::Moved
}

fn move_down<P: Page>(page: &mut P, _key: KeyEvent) -> Outcome {
    page.state_mut().move_cursor(Direction::Down);
    Outcome::Moved
}

fn upvote<P: Page>(page: &mut P, _key: KeyEvent) -> Outcome {
    page.state_mut().vote(VoteDirection::Up);
    Outcome::Continue
}

fn downvote<P: Page>(page: &mut P, _key: KeyEvent) -> Outcome {
    page.state_mut().vote(VoteDirection::Down);
    Outcome::Continue
}

fn refresh<P: Page>(_page: &mut P, _key: KeyEvent) -> Outcome {
    Outcome::Refresh
}

fn ignore<P: Page>(_page: &mut P, _key: KeyEvent) -> Outcome {
    Outcome::Continue
}

/// Bindings shared by every page type.
pub fn base_keymap<P: Page>() -> KeyMap<P> {
    KeyMap::new()
        .bind(&[Binding::char('q'), Binding::Ctrl('c')], quit::<P>)
        .bind(&[Binding::char('?')], help::<P>)
        .bind(&[Binding::char('k'), Binding::Key(KeyCode::Up)], move_up::<P>)
        .bind(
            &[Binding::char('j'), Binding::Key(KeyCode::Down)],
            move_down::<P>,
        )
        .bind(&[Binding::char('a')], upvote::<P>)
        .bind(&[Binding::char('z')], downvote::<P>)
        .bind(
            &[Binding::char('r'), Binding::Key(KeyCode::F(5))],
            refresh::<P>,
        )
        .bind(&[Binding::Fallback], ignore::<P>)
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
