//! tpager
//!
//! Terminal pager for threaded listings. A cursor walks a lazily produced,
//! possibly unbounded sequence of variable-height items; the page renderer
//! fits a window of them into the screen, flipping the layout bottom-up when
//! the selection reaches the edge.
//!
//! The pure core (`model`, `provider`, `state`) never touches the terminal;
//! `view` is the impure shell that draws and reads input.

pub mod config;
pub mod logging;
pub mod model;
pub mod provider;
pub mod source;
pub mod state;
pub mod view;
