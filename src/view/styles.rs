//! Item styling configuration.
//!
//! Provides the row styles painters use, and the per-depth colors of the
//! comment gutter.

use crate::model::VoteState;
use crate::provider::RowRole;
use ratatui::style::{Color, Modifier, Style};

/// Style for section headers in overlays.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for secondary hints.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Header bar style.
pub const HEADER_BAR: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::REVERSED)
    .add_modifier(Modifier::BOLD);

const DEPTH_COLORS: [Color; 5] = [
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::Cyan,
];

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit configuration, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== ItemStyles =====

/// Styles painters apply to item rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyles {
    colors: bool,
    title: Style,
    meta: Style,
    body: Style,
    hint: Style,
}

impl ItemStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors, only modifiers (bold, dim) distinguish rows.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                colors: true,
                title: Style::new().add_modifier(Modifier::BOLD),
                meta: Style::new().fg(Color::Yellow),
                body: Style::new(),
                hint: Style::new().fg(Color::Cyan),
            }
        } else {
            Self {
                colors: false,
                title: Style::new().add_modifier(Modifier::BOLD),
                meta: Style::new().add_modifier(Modifier::DIM),
                body: Style::new(),
                hint: Style::new().add_modifier(Modifier::DIM),
            }
        }
    }

    /// Style for a row; meta rows take the vote color.
    pub fn row(&self, role: RowRole, likes: VoteState) -> Style {
        match role {
            RowRole::Title => self.title,
            RowRole::Body => self.body,
            RowRole::Hint => self.hint,
            RowRole::Meta => match (likes, self.colors) {
                (VoteState::Up, true) => Style::new().fg(Color::Green),
                (VoteState::Down, true) => Style::new().fg(Color::Red),
                _ => self.meta,
            },
        }
    }

    /// Gutter bar style for a comment at `depth`.
    pub fn depth_bar(&self, depth: u16) -> Style {
        if self.colors {
            Style::new().fg(DEPTH_COLORS[usize::from(depth) % DEPTH_COLORS.len()])
        } else {
            Style::new()
        }
    }
}

impl Default for ItemStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
