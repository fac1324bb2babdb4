// Status bar component
//
// Renders the result count and the shareable location at the bottom.

use crate::directory::Location;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals drop the labels and keep just count and link.
pub fn render(f: &mut Frame, area: Rect, shown: usize, location: &Location, ctx: &RenderContext) {
    let bp = Breakpoint::from_width(area.width);

    let status_text = if bp.at_least(Breakpoint::Wide) {
        format!(
            " {} shown │ 🔗 {} │ y:copy link  Tab:focus  q:quit",
            shown,
            location.href()
        )
    } else {
        format!(" {} │ {}", shown, location.href())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(ctx.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
