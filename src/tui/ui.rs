// UI rendering logic
//
// Lays out the screen and hands each region to its component. Called on
// every frame; components record the areas they were drawn in so mouse
// clicks can be routed back to them.

use super::app::{App, Focus};
use super::components::{status_bar, title_bar};
use super::layout::Breakpoint;
use super::traits::RenderContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Number of log lines in the strip above the status bar
const LOG_LINES: usize = 3;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Vertical sections:
    // - Title bar (3 lines)
    // - Search input (3 lines)
    // - Filters + doctor list (fills remaining space)
    // - Log strip (top border + LOG_LINES)
    // - Status bar (top border + 1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(LOG_LINES as u16 + 1),
            Constraint::Length(2),
        ])
        .split(f.area());

    let frame = app.animation_frame();

    title_bar::render(
        f,
        chunks[0],
        &app.source,
        app.focus_hint(),
        &RenderContext::new(&app.theme, false, frame),
    );

    let (filter_area, list_area) = split_main(chunks[2]);

    let filter_ctx = RenderContext::new(&app.theme, app.focus == Focus::Filters, frame);
    app.filter_panel.render(f, filter_area, &app.view, &filter_ctx);

    let list_view = app.list_view();
    let list_ctx = RenderContext::new(&app.theme, app.focus == Focus::List, frame);
    app.doctor_list.render(f, list_area, &list_view, &list_ctx);

    render_log_strip(f, chunks[3], app);

    status_bar::render(
        f,
        chunks[4],
        list_view.cards().len(),
        &app.location,
        &RenderContext::new(&app.theme, false, frame),
    );

    // Search last: its dropdown overlays the panels below
    app.search_area = chunks[1];
    let search_ctx = RenderContext::new(&app.theme, app.focus == Focus::Search, frame);
    app.search_bar
        .render(f, chunks[1], &app.view.search, &search_ctx);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// Filters beside the list, or stacked above it on narrow terminals
fn split_main(area: Rect) -> (Rect, Rect) {
    let bp = Breakpoint::from_width(area.width);
    let parts = if bp.at_least(Breakpoint::Normal) {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(bp.sidebar_width()), Constraint::Min(20)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area)
    };
    (parts[0], parts[1])
}

fn render_log_strip(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .log_buffer
        .recent(LOG_LINES)
        .into_iter()
        .map(|entry| Line::from(Span::styled(entry.display_line(), app.theme.log_style(entry.level))))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(app.theme.border_style(false))
            .title(" Logs "),
    );
    f.render_widget(paragraph, area);
}
