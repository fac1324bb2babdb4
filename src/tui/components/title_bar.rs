// Title bar component
//
// Renders the app name, the load state of the directory and the focused
// panel's key hints.

use crate::config::VERSION;
use crate::source::SourceState;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Short load-state indicator for the title
fn source_indicator(source: &SourceState, ctx: &RenderContext) -> String {
    match source {
        SourceState::Loading => format!(" {} loading", ctx.spinner_char()),
        SourceState::Loaded(doctors) => format!(" ● {} doctors", doctors.len()),
        SourceState::Failed(_) => " ✗ offline".to_string(),
    }
}

pub fn render(f: &mut Frame, area: Rect, source: &SourceState, hint: &str, ctx: &RenderContext) {
    let theme = ctx.theme;
    let title = Line::from(vec![
        Span::styled(
            format!(" 🩺 docfinder v{}", VERSION),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            source_indicator(source, ctx),
            Style::default().fg(if source.failure().is_some() {
                theme.error
            } else {
                theme.muted
            }),
        ),
    ]);

    let paragraph = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(format!(" {} ", hint)).right_aligned()),
    );

    f.render_widget(paragraph, area);
}
