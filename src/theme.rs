//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and visual constants used by the
//! wizard screens. Components should reference these constants instead of
//! hardcoding colors.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color for borders, titles and highlights (university crimson)
    pub const PRIMARY: Color = Color::Red;

    /// Secondary accent color for selected items and emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback (capacity-exceeded advisory)
    pub const ERROR: Color = Color::LightRed;

    /// Informational feedback (selection summary)
    pub const INFO: Color = Color::LightBlue;

    /// Border of the focused widget
    pub const BORDER_ACTIVE: Color = Color::Red;

    /// Border of unfocused widgets
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Background used for the cursor row in lists
    pub const HIGHLIGHT_BG: Color = Color::Red;

    /// Foreground used for the cursor row in lists
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Screen title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor row in selection lists
    pub fn highlight() -> Style {
        Style::default()
            .fg(Colors::HIGHLIGHT_FG)
            .bg(Colors::HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding hint label in the navigation bar
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed keybinding hint for an unavailable action
    pub fn key_hint_disabled() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }
}
