//! Page state and input handling (pure).
//!
//! Everything in here can be driven without a terminal: the navigator
//! arithmetic, the dispatch tables, and the page types built from them.

pub mod dispatch;
pub mod listing_page;
pub mod navigator;
pub mod page;
pub mod thread_page;

// Re-export for convenience
pub use dispatch::{Action, Binding, Controller, KeyMap, Outcome};
pub use listing_page::ListingPage;
pub use navigator::{MoveOutcome, Navigator};
pub use page::{base_keymap, Overlay, Page, PageState};
pub use thread_page::ThreadPage;
