//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a short duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
#[derive(Debug)]
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner, above the status bar
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 3);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.bg));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg))
            .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
