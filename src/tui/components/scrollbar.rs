//! Scrollbar rendering helper
//!
//! Draws a minimal vertical scrollbar from a `ScrollState`, only when the
//! content overflows the viewport.

use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::{Margin, Rect},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a vertical scrollbar on the right border of a panel
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState) {
    if !scroll.needs_scrollbar() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);

    // Position follows the cursor so the thumb tracks the highlighted card
    let mut state = ScrollbarState::new(scroll.total())
        .viewport_content_length(scroll.viewport())
        .position(scroll.cursor());

    f.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state,
    );
}
