//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Smallest terminal height anything is drawn at.
pub const MIN_HEIGHT: u16 = 10;

/// Smallest terminal width anything is drawn at.
pub const MIN_WIDTH: u16 = 20;

/// Smallest content area the page renderer lays items into.
pub const MIN_CONTENT_HEIGHT: u16 = MIN_HEIGHT - HEADER_HEIGHT;

/// Columns reserved at the left of every item for the cursor gutter.
pub const GUTTER_WIDTH: u16 = 1;

/// Columns withheld from item wrapping: the gutter plus a right margin.
pub const WRAP_MARGIN: u16 = GUTTER_WIDTH + 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
