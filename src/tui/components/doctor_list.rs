//! Doctor list panel
//!
//! Pure presentation of a [`ListView`]: a placeholder for the loading,
//! failed and empty states, otherwise one card per doctor. Every filtered
//! doctor is rendered; the panel only scrolls, it never paginates.

use super::scrollbar::render_scrollbar;
use crate::directory::card::{DoctorCard, ListView, EMPTY_TEXT, LOADING_TEXT};
use crate::directory::ViewState;
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Lines per card, including the blank separator
const CARD_HEIGHT: usize = 4;

#[derive(Debug, Default)]
pub struct DoctorList {
    scroll: ScrollState,
    area: Rect,
}

impl DoctorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// New result set: start from the top
    pub fn reset(&mut self) {
        self.scroll.reset();
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.scroll.cursor()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Select the card under a screen cell
    pub fn click(&mut self, row: u16) {
        let inner_top = self.area.y + 1;
        let Some(line) = row.checked_sub(inner_top) else {
            return;
        };
        let index = self.scroll.offset() + line as usize / CARD_HEIGHT;
        self.scroll.select(index);
    }

    fn card_item(card: &DoctorCard, ctx: &RenderContext, wide: bool) -> ListItem<'static> {
        let theme = ctx.theme;
        let photo = if card.has_photo { "◉ " } else { "○ " };

        let mut header = vec![
            Span::raw(photo),
            Span::styled(
                card.name.clone(),
                Style::default()
                    .fg(theme.doctor_name)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", card.specialty),
                Style::default().fg(theme.specialty),
            ),
        ];
        if wide {
            header.push(Span::styled(
                format!("  {}", card.experience),
                Style::default().fg(theme.muted),
            ));
        }

        let description = if wide {
            card.description.clone()
        } else {
            card.experience.clone()
        };

        let lines = vec![
            Line::from(header),
            Line::from(Span::styled(
                format!("  {}", description),
                Style::default().fg(theme.muted),
            )),
            Line::from(vec![
                Span::raw(format!("  {} · ", card.clinic)),
                Span::styled(
                    card.fee.clone(),
                    Style::default().fg(theme.fee).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ];
        ListItem::new(lines)
    }

    fn render_placeholder(f: &mut Frame, area: Rect, block: Block, text: Line, ctx: &RenderContext) {
        let paragraph = Paragraph::new(vec![Line::default(), text])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(ctx.theme.muted))
            .block(block);
        f.render_widget(paragraph, area);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, view: &ListView, ctx: &RenderContext) {
        self.area = area;
        let theme = ctx.theme;
        let count = view.cards().len();

        let title = match view {
            ListView::Populated(_) => format!(" Doctors ({}) ", count),
            _ => " Doctors ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(ctx.focused))
            .title(title);

        match view {
            ListView::Loading => {
                let text = Line::from(format!("{} {}", ctx.spinner_char(), LOADING_TEXT));
                Self::render_placeholder(f, area, block, text, ctx);
            }
            ListView::Failed(message) => {
                let text = Line::from(Span::styled(
                    format!("Could not load doctors: {}", message),
                    Style::default().fg(theme.error),
                ));
                Self::render_placeholder(f, area, block, text, ctx);
            }
            ListView::Empty => {
                Self::render_placeholder(f, area, block, Line::from(EMPTY_TEXT), ctx);
            }
            ListView::Populated(cards) => {
                let wide = Breakpoint::from_width(area.width).at_least(Breakpoint::Wide);
                let viewport = (area.height.saturating_sub(2) as usize / CARD_HEIGHT).max(1);
                self.scroll.update_dimensions(cards.len(), viewport);

                let (start, end) = self.scroll.visible_range();
                let items: Vec<ListItem> = cards[start..end]
                    .iter()
                    .map(|card| Self::card_item(card, ctx, wide))
                    .collect();

                let selected = ctx
                    .focused
                    .then(|| self.scroll.cursor().saturating_sub(start));
                let mut state = ListState::default().with_selected(selected);
                let list = List::new(items)
                    .block(block)
                    .highlight_style(Style::default().bg(theme.selected_bg));
                f.render_stateful_widget(list, area, &mut state);

                render_scrollbar(f, area, &self.scroll);
            }
        }
    }
}

impl Interactive for DoctorList {
    fn handle_key(&mut self, key: KeyEvent, _view: &mut ViewState) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.select_next(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.select_last(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓/jk:scroll  PgUp/PgDn:page  y:copy link"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DoctorRecord;
    use crate::tui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn draw(list: &mut DoctorList, view: &ListView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let theme = Theme::dark();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, true, 0);
                list.render(f, f.area(), view, &ctx);
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_placeholders() {
        let mut list = DoctorList::new();
        assert!(draw(&mut list, &ListView::Loading).contains(LOADING_TEXT));
        assert!(draw(&mut list, &ListView::Empty).contains(EMPTY_TEXT));
        assert!(draw(&mut list, &ListView::Failed("HTTP 500".to_string()))
            .contains("Could not load doctors: HTTP 500"));
    }

    #[test]
    fn test_populated_renders_cards() {
        let records: Vec<DoctorRecord> = ["Dr. One", "Dr. Two"]
            .iter()
            .map(|name| DoctorRecord {
                name: name.to_string(),
                fees: Some("₹ 400".to_string()),
                ..Default::default()
            })
            .collect();
        let refs: Vec<&DoctorRecord> = records.iter().collect();
        let view = ListView::build(false, None, &refs);

        let mut list = DoctorList::new();
        let text = draw(&mut list, &view);
        assert!(text.contains("Dr. One"));
        assert!(text.contains("Dr. Two"));
        assert!(text.contains("Doctors (2)"));
        assert!(text.contains("General Physician"));
    }

    #[test]
    fn test_keys_move_cursor_within_results() {
        let records: Vec<DoctorRecord> = (0..10)
            .map(|i| DoctorRecord {
                name: format!("Dr. {}", i),
                ..Default::default()
            })
            .collect();
        let refs: Vec<&DoctorRecord> = records.iter().collect();
        let view = ListView::build(false, None, &refs);

        let mut list = DoctorList::new();
        draw(&mut list, &view);

        let mut state = ViewState::default();
        let down = KeyEvent::from(KeyCode::Down);
        list.handle_key(down, &mut state);
        list.handle_key(down, &mut state);
        assert_eq!(list.cursor(), 2);

        list.handle_key(KeyEvent::from(KeyCode::End), &mut state);
        assert_eq!(list.cursor(), 9);

        list.reset();
        assert_eq!(list.cursor(), 0);
    }
}
