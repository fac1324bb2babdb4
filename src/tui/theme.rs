// Theme system for the TUI
//
// Two built-in palettes, picked by name from the config. Each theme defines
// colors for every UI element the browser draws.

use ratatui::style::{Color, Modifier, Style};
use tracing::Level;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a config name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Doctor cards
    pub doctor_name: Color,
    pub specialty: Color,
    pub fee: Color,

    // Filter panel markers
    pub checked: Color,

    // States
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            doctor_name: Color::White,
            specialty: Color::LightBlue,
            fee: Color::Green,

            checked: Color::Cyan,

            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            doctor_name: Color::Black,
            specialty: Color::Blue,
            fee: Color::Rgb(0, 110, 0),

            checked: Color::Blue,

            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Border style for a panel, brighter when focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for the highlighted row of a list
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn log_style(&self, level: Level) -> Style {
        let color = match level {
            Level::ERROR => self.log_error,
            Level::WARN => self.log_warn,
            Level::INFO => self.log_info,
            _ => self.log_debug,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
    }

    #[test]
    fn test_focused_border_differs() {
        let theme = Theme::dark();
        assert_ne!(theme.border_style(true), theme.border_style(false));
    }
}
