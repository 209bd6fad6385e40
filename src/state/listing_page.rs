//! Listing page: one row per post; opening a post shows its thread.

use super::dispatch::{Binding, Controller, KeyMap, Outcome};
use super::page::{base_keymap, Page, PageState};
use crate::provider::ListingContent;
use crate::view::painter::ListingPainter;
use crate::view::styles::ItemStyles;
use crossterm::event::{KeyCode, KeyEvent};

/// Page over a listing of posts.
#[derive(Debug)]
pub struct ListingPage {
    state: PageState<ListingContent>,
    styles: ItemStyles,
}

impl ListingPage {
    /// Listing with the first post selected.
    pub fn new(content: ListingContent, styles: ItemStyles) -> Self {
        Self {
            state: PageState::at_first_item(content),
            styles,
        }
    }

    /// Dispatch table for listing pages.
    pub fn controller() -> Controller<Self> {
        let keys = KeyMap::new().bind(
            &[
                Binding::Key(KeyCode::Enter),
                Binding::Key(KeyCode::Right),
                Binding::char('l'),
            ],
            open_selected,
        );
        Controller::new(keys, base_keymap())
    }

    /// Replace the listing after a reload, selecting the first post again.
    pub fn replace_content(&mut self, content: ListingContent) {
        self.state = PageState::at_first_item(content);
    }
}

fn open_selected(page: &mut ListingPage, _key: KeyEvent) -> Outcome {
    match page.state.navigator().absolute_index() {
        Some(index) => Outcome::Open(index),
        None => {
            page.state.ring();
            Outcome::Continue
        }
    }
}

impl Page for ListingPage {
    type Content = ListingContent;
    type Painter = ListingPainter;

    fn state(&self) -> &PageState<ListingContent> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PageState<ListingContent> {
        &mut self.state
    }

    fn painter(&self) -> ListingPainter {
        ListingPainter::new(self.styles)
    }
}
