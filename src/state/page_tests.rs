//! Tests for page state and the base bindings.

use super::*;
use crate::model::Post;
use crate::provider::ListingContent;
use crate::state::dispatch::Controller;
use crate::view::painter::ListingPainter;
use chrono::{TimeZone, Utc};
use crossterm::event::KeyModifiers;

struct TestPage {
    state: PageState<ListingContent>,
}

impl Page for TestPage {
    type Content = ListingContent;
    type Painter = ListingPainter;

    fn state(&self) -> &PageState<ListingContent> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PageState<ListingContent> {
        &mut self.state
    }

    fn painter(&self) -> ListingPainter {
        ListingPainter::default()
    }
}

fn listing(count: usize) -> ListingContent {
    let posts = (0..count)
        .map(|i| Post {
            title: format!("post {i}"),
            author: "ann".to_string(),
            ..Post::default()
        })
        .collect();
    let loaded_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    ListingContent::from_posts("test", posts, loaded_at)
}

fn page(count: usize) -> TestPage {
    TestPage {
        state: PageState::at_first_item(listing(count)),
    }
}

fn draw(page: &mut TestPage) -> usize {
    let area = Rect::new(0, 0, 40, 20);
    let mut buf = Buffer::empty(area);
    let painter = page.painter();
    page.state.render(area, &mut buf, &painter)
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn controller() -> Controller<TestPage> {
    Controller::new(KeyMap::new(), base_keymap())
}

#[test]
fn first_item_selected_when_content_exists() {
    let page = page(3);
    assert_eq!(page.state.navigator().absolute_index(), Some(0));
}

#[test]
fn empty_content_starts_unpositioned() {
    let page = page(0);
    assert_eq!(page.state.navigator().absolute_index(), None);
}

#[test]
fn move_before_first_render_rings_bell() {
    let mut page = page(3);

    let outcome = page.state.move_cursor(Direction::Down);

    assert!(!outcome.valid);
    assert!(page.state.take_bell());
    assert!(!page.state.take_bell(), "bell is consumed once taken");
}

#[test]
fn valid_move_is_silent() {
    let mut page = page(3);
    assert_eq!(draw(&mut page), 3);

    let outcome = page.state.move_cursor(Direction::Down);

    assert!(outcome.valid);
    assert_eq!(page.state.navigator().absolute_index(), Some(1));
    assert!(!page.state.take_bell());
}

#[test]
fn move_past_last_item_rings_bell() {
    let mut page = page(1);
    draw(&mut page);

    let outcome = page.state.move_cursor(Direction::Down);

    assert!(!outcome.valid);
    assert!(page.state.take_bell());
    assert_eq!(page.state.navigator().absolute_index(), Some(0));
}

#[test]
fn vote_toggles_selected_item() {
    let mut page = page(2);

    assert_eq!(page.state.vote(VoteDirection::Up), Some(VoteState::Up));
    assert_eq!(page.state.content().get(0).unwrap().likes, VoteState::Up);
    assert_eq!(page.state.vote(VoteDirection::Up), Some(VoteState::None));
    assert!(!page.state.take_bell());
}

#[test]
fn vote_with_nothing_selected_rings_bell() {
    let mut page = page(0);

    assert_eq!(page.state.vote(VoteDirection::Down), None);
    assert!(page.state.take_bell());
}

#[test]
fn overlays_show_and_dismiss() {
    let mut page = page(1);
    assert!(!page.state.dismiss_overlay());

    page.state.notify(["Nothing here"]);
    assert_eq!(
        page.state.overlay(),
        Some(&Overlay::Notification(vec!["Nothing here".to_string()]))
    );
    assert!(page.state.dismiss_overlay());
    assert_eq!(page.state.overlay(), None);
}

#[test]
fn replace_drops_old_layout() {
    let mut page = page(3);
    draw(&mut page);
    assert_eq!(page.state.renderer().visible_count(), 3);

    page.state.replace(listing(1), Navigator::default());

    assert_eq!(page.state.renderer().visible_count(), 0);
    assert!(page.state.content().get(1).is_err());
}

#[test]
fn base_keys_quit_and_help() {
    let mut page = page(1);
    let controller = controller();

    assert_eq!(controller.trigger(&mut page, key('q')), Outcome::Quit);
    assert_eq!(
        controller.trigger(
            &mut page,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ),
        Outcome::Quit
    );
    assert_eq!(controller.trigger(&mut page, key('?')), Outcome::Continue);
    assert_eq!(page.state.overlay(), Some(&Overlay::Help));
}

#[test]
fn base_movement_keys_report_moved() {
    let mut page = page(3);
    draw(&mut page);
    let controller = controller();

    assert_eq!(controller.trigger(&mut page, key('j')), Outcome::Moved);
    assert_eq!(
        controller.trigger(&mut page, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
        Outcome::Moved
    );
    assert_eq!(page.state.navigator().absolute_index(), Some(2));
    assert_eq!(controller.trigger(&mut page, key('k')), Outcome::Moved);
    assert_eq!(page.state.navigator().absolute_index(), Some(1));
}

#[test]
fn base_refresh_and_unbound_keys() {
    let mut page = page(1);
    let controller = controller();

    assert_eq!(controller.trigger(&mut page, key('r')), Outcome::Refresh);
    assert_eq!(
        controller.trigger(&mut page, KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
        Outcome::Refresh
    );
    assert_eq!(controller.trigger(&mut page, key('x')), Outcome::Continue);
    assert!(!page.state.take_bell());
}

#[test]
fn title_is_content_name() {
    assert_eq!(page(1).title(), "test");
}
