//! Thread page: a post above its comment tree.
//!
//! The page opens with nothing selected and the post shown as a header in
//! the slot above the first comment.

use super::dispatch::{Binding, Controller, KeyMap, Outcome};
use super::navigator::Navigator;
use super::page::{base_keymap, Page, PageState};
use crate::model::{Anchor, Position};
use crate::provider::{IndexProbe, ThreadContent};
use crate::view::painter::ThreadPainter;
use crate::view::styles::ItemStyles;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

/// Page over one post's comments.
#[derive(Debug)]
pub struct ThreadPage {
    state: PageState<ThreadContent>,
    styles: ItemStyles,
}

impl ThreadPage {
    /// Thread with the post header in view and nothing selected.
    pub fn new(content: ThreadContent, styles: ItemStyles) -> Self {
        Self {
            state: PageState::new(content, Navigator::unpositioned()),
            styles,
        }
    }

    /// Consume the page, keeping its content.
    pub fn into_content(self) -> ThreadContent {
        self.state.into_content()
    }

    /// Dispatch table for thread pages.
    pub fn controller() -> Controller<Self> {
        let keys = KeyMap::new()
            .bind(
                &[
                    Binding::Key(KeyCode::Enter),
                    Binding::Key(KeyCode::Right),
                    Binding::char('l'),
                    Binding::char(' '),
                ],
                toggle_comment,
            )
            .bind(
                &[
                    Binding::Key(KeyCode::Left),
                    Binding::char('h'),
                    Binding::Key(KeyCode::Esc),
                ],
                back,
            );
        Controller::new(keys, base_keymap())
    }
}

fn toggle_comment(page: &mut ThreadPage, _key: KeyEvent) -> Outcome {
    let index = page.state.navigator().selected_index();
    match page.state.content_mut().toggle(index) {
        Ok(true) => {
            // Rows after the toggled comment shift, so the window may now
            // start past the end.
            let anchor = page.state.navigator().page_index();
            if !page.state.content().is_valid(anchor) {
                debug!(anchor, index, "Re-anchoring on toggled comment");
                let nav = Navigator::new(Position::new(Anchor::from_index(index), 0, false));
                page.state.reset_navigator(nav);
            }
        }
        Ok(false) | Err(_) => page.state.ring(),
    }
    Outcome::Continue
}

fn back(_page: &mut ThreadPage, _key: KeyEvent) -> Outcome {
    Outcome::Back
}

impl Page for ThreadPage {
    type Content = ThreadContent;
    type Painter = ThreadPainter;

    fn state(&self) -> &PageState<ThreadContent> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PageState<ThreadContent> {
        &mut self.state
    }

    fn painter(&self) -> ThreadPainter {
        ThreadPainter::new(self.styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, Direction, EntryKind, Post};
    use crate::provider::ContentProvider;
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;
    use ratatui::{buffer::Buffer, layout::Rect};

    fn comment(author: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            author: author.to_string(),
            body: format!("{author} here"),
            replies,
            ..Comment::default()
        }
    }

    fn page() -> ThreadPage {
        let post = Post {
            title: "A post".to_string(),
            author: "op".to_string(),
            comments: vec![
                comment("ann", vec![comment("bob", vec![]), comment("cy", vec![])]),
                comment("dee", vec![]),
            ],
            ..Post::default()
        };
        let loaded_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ThreadPage::new(ThreadContent::new(post, 2, loaded_at), ItemStyles::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(page: &mut ThreadPage) -> usize {
        let area = Rect::new(0, 0, 40, 30);
        let mut buf = Buffer::empty(area);
        let painter = page.painter();
        page.state_mut().render(area, &mut buf, &painter)
    }

    #[test]
    fn opens_on_header_with_nothing_selected() {
        let mut page = page();
        assert_eq!(page.state().navigator().absolute_index(), None);
        assert_eq!(page.state().navigator().selected_index(), -1);
        assert_eq!(draw(&mut page), 5);
        assert_eq!(page.title(), "A post");
    }

    #[test]
    fn toggle_collapses_selected_comment() {
        let controller = ThreadPage::controller();
        let mut page = page();
        draw(&mut page);
        page.state_mut().move_cursor(Direction::Down);
        assert_eq!(page.state().navigator().absolute_index(), Some(0));

        controller.trigger(&mut page, press(KeyCode::Enter));

        let content = page.state().content();
        assert_eq!(content.visible_len(), 2);
        assert_eq!(content.get(0).unwrap().kind, EntryKind::Collapsed);
        assert!(!page.state_mut().take_bell());

        controller.trigger(&mut page, press(KeyCode::Char(' ')));
        assert_eq!(page.state().content().visible_len(), 4);
    }

    #[test]
    fn toggle_on_leaf_or_header_rings_bell() {
        let controller = ThreadPage::controller();
        let mut page = page();

        controller.trigger(&mut page, press(KeyCode::Enter));
        assert!(page.state_mut().take_bell(), "header cannot collapse");

        draw(&mut page);
        page.state_mut().move_cursor(Direction::Down);
        page.state_mut().move_cursor(Direction::Down);
        assert_eq!(page.state().navigator().absolute_index(), Some(1));
        controller.trigger(&mut page, press(KeyCode::Char('l')));
        assert!(page.state_mut().take_bell(), "leaf comment cannot collapse");
    }

    #[test]
    fn collapsing_reanchors_when_window_start_disappears() {
        let mut page = page();
        // Window anchored on the last comment walking back to the first.
        let nav = Navigator::new(Position::new(Anchor::Positioned(3), 3, true));
        page.state_mut().reset_navigator(nav);

        toggle_comment(&mut page, press(KeyCode::Enter));

        let nav = page.state().navigator();
        assert_eq!(nav.absolute_index(), Some(0));
        assert!(!nav.is_inverted());
        assert_eq!(nav.page_index(), 0);
    }

    #[test]
    fn back_keys_return_back() {
        let controller = ThreadPage::controller();
        let mut page = page();
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Esc] {
            assert_eq!(controller.trigger(&mut page, press(code)), Outcome::Back);
        }
    }

    #[test]
    fn header_vote_applies_to_post() {
        let controller = ThreadPage::controller();
        let mut page = page();

        controller.trigger(&mut page, press(KeyCode::Char('a')));

        assert_eq!(
            page.state().content().get(-1).unwrap().likes,
            crate::model::VoteState::Up
        );
    }
}
