//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod header;
pub mod help;
pub mod notification;
pub mod painter;
pub mod renderer;
pub mod styles;

pub use header::HeaderBar;
pub use help::render_help_overlay;
pub use notification::render_notification;
pub use painter::{ItemPainter, ListingPainter, ThreadPainter};
pub use renderer::{sub_region, PageRenderer, Viewport, VisibleRegion};
pub use styles::{ColorConfig, ItemStyles};

use crate::config::DEFAULT_COMMENT_INDENT;
use crate::model::SourceError;
use crate::provider::{ContentProvider, ListingContent};
use crate::source::ListingSource;
use crate::state::{Controller, ListingPage, Outcome, Overlay, Page, ThreadPage};
use chrono::Utc;
use constants::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The listing could not be loaded
    #[error("Listing error: {0}")]
    Source(#[from] SourceError),
}

/// Runtime settings resolved from config and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    /// Discard key events queued while a move was being drawn.
    pub clear_input_queue: bool,
    /// Columns of indentation per comment depth.
    pub comment_indent: u16,
    /// Row styles for painters.
    pub styles: ItemStyles,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            clear_input_queue: true,
            comment_indent: DEFAULT_COMMENT_INDENT,
            styles: ItemStyles::default(),
        }
    }
}

/// A thread opened from the listing.
#[derive(Debug)]
struct OpenThread {
    /// Listing index of the post.
    index: usize,
    page: ThreadPage,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct App<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    listing: ListingPage,
    thread: Option<OpenThread>,
    listing_keys: Controller<ListingPage>,
    thread_keys: Controller<ThreadPage>,
    source: ListingSource,
    settings: AppSettings,
    /// A move was made; queued input may be dropped before the next read.
    drain_pending: bool,
    pending_bell: bool,
    bells: usize,
}

impl App<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        content: ListingContent,
        source: ListingSource,
        settings: AppSettings,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, content, source, settings))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on input between
    /// events; each event is fully handled and drawn before the next read.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    if self.take_bell() {
                        ring_bell()?;
                    }
                    if std::mem::take(&mut self.drain_pending) {
                        discard_queued_input()?;
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> App<B>
where
    B: Backend,
{
    /// Create the application on an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        content: ListingContent,
        source: ListingSource,
        settings: AppSettings,
    ) -> Self {
        Self {
            terminal,
            listing: ListingPage::new(content, settings.styles),
            thread: None,
            listing_keys: ListingPage::controller(),
            thread_keys: ThreadPage::controller(),
            source,
            settings,
            drain_pending: false,
            pending_bell: false,
            bells: 0,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even over an overlay
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let outcome = match &mut self.thread {
            Some(open) => dispatch(&mut open.page, &self.thread_keys, key),
            None => dispatch(&mut self.listing, &self.listing_keys, key),
        };

        match outcome {
            Outcome::Quit => return true,
            Outcome::Moved => self.drain_pending = self.settings.clear_input_queue,
            Outcome::Back => self.close_thread(),
            Outcome::Open(index) => self.open_thread(index),
            Outcome::Refresh => self.refresh(),
            Outcome::Continue => {}
        }

        self.collect_bells();
        false
    }

    /// Render a single frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let listing = &mut self.listing;
        let thread = &mut self.thread;
        self.terminal.draw(|frame| match thread {
            Some(open) => draw_page(frame, &mut open.page),
            None => draw_page(frame, listing),
        })?;
        Ok(())
    }

    /// The listing page.
    pub fn listing(&self) -> &ListingPage {
        &self.listing
    }

    /// The open thread, if any.
    pub fn thread(&self) -> Option<&ThreadPage> {
        self.thread.as_ref().map(|open| &open.page)
    }

    /// Number of bells rung so far.
    pub fn bell_count(&self) -> usize {
        self.bells
    }

    /// Whether a bell is waiting to be sounded; clears the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.pending_bell)
    }

    /// The terminal, for buffer inspection.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn open_thread(&mut self, index: usize) {
        match self
            .listing
            .state()
            .content()
            .thread(index, self.settings.comment_indent)
        {
            Ok(content) => {
                info!(index, title = content.name(), "Opening thread");
                self.thread = Some(OpenThread {
                    index,
                    page: ThreadPage::new(content, self.settings.styles),
                });
            }
            Err(error) => {
                warn!(%error, "Cannot open thread");
                self.listing.state_mut().ring();
            }
        }
    }

    /// Close the thread, carrying its votes back into the listing.
    fn close_thread(&mut self) {
        let Some(open) = self.thread.take() else {
            return;
        };
        info!(index = open.index, "Closing thread");
        let post = open.page.into_content().into_post();
        if let Err(error) = self.listing.state_mut().content_mut().store_post(open.index, post) {
            warn!(%error, "Thread post is gone from the listing");
        }
    }

    fn refresh(&mut self) {
        let content = match self.source.load(Utc::now()) {
            Ok(content) => content,
            Err(error) => {
                warn!(%error, "Reload failed");
                let lines = ["Reload failed".to_string(), error.to_string()];
                match &mut self.thread {
                    Some(open) => open.page.state_mut().notify(lines),
                    None => self.listing.state_mut().notify(lines),
                }
                return;
            }
        };

        info!(source = ?self.source, "Reloaded listing");
        self.listing.replace_content(content);

        let Some(index) = self.thread.as_ref().map(|open| open.index) else {
            return;
        };
        match self
            .listing
            .state()
            .content()
            .thread(index, self.settings.comment_indent)
        {
            Ok(content) => {
                self.thread = Some(OpenThread {
                    index,
                    page: ThreadPage::new(content, self.settings.styles),
                });
            }
            Err(_) => {
                self.thread = None;
                self.listing
                    .state_mut()
                    .notify(["Post is no longer in the listing"]);
            }
        }
    }

    fn collect_bells(&mut self) {
        let mut rang = self.listing.state_mut().take_bell();
        if let Some(open) = &mut self.thread {
            rang |= open.page.state_mut().take_bell();
        }
        if rang {
            self.bells += 1;
            self.pending_bell = true;
        }
    }
}

/// Route a key to a page. A shown overlay swallows the key and closes.
fn dispatch<P: Page>(page: &mut P, keys: &Controller<P>, key: KeyEvent) -> Outcome {
    if page.state_mut().dismiss_overlay() {
        return Outcome::Continue;
    }
    keys.trigger(page, key)
}

/// Draw one page: header, content, cursor, then any overlay.
///
/// Below the minimum screen size nothing is drawn and the page keeps no
/// layout, so moves are rejected until the screen grows.
fn draw_page<P: Page>(frame: &mut Frame, page: &mut P) {
    let area = frame.area();
    if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
        page.state_mut().clear_layout();
        return;
    }

    let [header_area, content_area] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

    let painter = page.painter();
    let state = page.state_mut();
    state.render(content_area, frame.buffer_mut(), &painter);
    state.highlight(frame.buffer_mut());

    let selected = page.state().navigator().absolute_index();
    frame.render_widget(HeaderBar::new(page.title(), selected), header_area);

    match page.state().overlay() {
        Some(Overlay::Help) => render_help_overlay(frame, area),
        Some(Overlay::Notification(lines)) => render_notification(frame, area, lines),
        None => {}
    }
}

fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

/// Drop key events that piled up while the last move was drawn.
fn discard_queued_input() -> io::Result<()> {
    let mut dropped = 0usize;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(_) = event::read()? {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!(dropped, "Discarded queued key events");
    }
    Ok(())
}

/// Initialize and run the TUI application for a listing source
///
/// This is the main entry point for the TUI. It loads the listing before
/// touching the terminal, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: ListingSource, settings: AppSettings) -> Result<(), TuiError> {
    let content = source.load(Utc::now())?;
    info!(source = ?source, "Loaded listing");

    // Run the app and ensure cleanup happens even on error
    let result = App::new(content, source, settings).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
