//! Search input with an autocomplete dropdown
//!
//! The dropdown's visibility is shared with a pointer listener registered
//! on mount, so a click anywhere outside the bar's screen region closes it.
//! Suggestions are a cache of the last computed value: recomputed whenever
//! the search term or the directory changes, cleared when the term is empty.

use crate::directory::{suggestions, DoctorRecord, Suggestion, ViewState};
use crate::tui::pointer::{PointerBus, PointerDown, Subscription};
use crate::tui::traits::{Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::sync::{Arc, Mutex};

pub const PLACEHOLDER: &str = "Search Symptoms, Doctors, Specialists, Clinics";

/// State touched by both the bar and its pointer listener
#[derive(Debug, Default)]
struct Dropdown {
    visible: bool,
    /// Screen area of the input plus its open dropdown
    region: Rect,
}

#[derive(Default)]
pub struct SearchBar {
    dropdown: Arc<Mutex<Dropdown>>,
    suggestions: Vec<Suggestion>,
    highlighted: Option<usize>,
    subscription: Option<Subscription>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening for clicks outside the bar
    pub fn mount(&mut self, bus: &PointerBus) {
        let dropdown = Arc::clone(&self.dropdown);
        self.subscription = Some(bus.subscribe(move |event: PointerDown| {
            let Ok(mut dropdown) = dropdown.lock() else {
                return;
            };
            let inside = dropdown
                .region
                .contains(Position::new(event.column, event.row));
            if !inside {
                dropdown.visible = false;
            }
        }));
    }

    /// Stop listening; the listener is released with the subscription
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Input gained focus: show the dropdown
    pub fn focus(&mut self) {
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
        self.highlighted = None;
    }

    pub fn is_visible(&self) -> bool {
        self.dropdown.lock().map(|d| d.visible).unwrap_or(false)
    }

    /// Whether a screen cell falls on the open bar (input plus dropdown)
    pub fn region_contains(&self, column: u16, row: u16) -> bool {
        self.dropdown
            .lock()
            .is_ok_and(|d| d.visible && d.region.contains(Position::new(column, row)))
    }

    /// Record where the bar was drawn, for outside-click detection
    pub fn set_region(&mut self, region: Rect) {
        if let Ok(mut dropdown) = self.dropdown.lock() {
            dropdown.region = region;
        }
    }

    /// Recompute the suggestion cache for the current term
    pub fn refresh(&mut self, doctors: &[DoctorRecord], term: &str) {
        self.suggestions = suggestions(doctors, term);
        self.highlighted = self
            .highlighted
            .filter(|&idx| idx < self.suggestions.len());
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Suggestions actually on screen: only while the dropdown is open
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        if self.is_visible() {
            &self.suggestions
        } else {
            &[]
        }
    }

    #[cfg(test)]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Choose a suggestion: the search becomes its full name and the dropdown closes
    ///
    /// Returns whether the view state changed.
    pub fn choose(&mut self, index: usize, view: &mut ViewState) -> bool {
        let Some(chosen) = self.suggestions.get(index) else {
            return false;
        };
        let name = chosen.name.clone();
        self.hide();
        view.set_search(name)
    }

    /// Index of the suggestion row under a screen cell, if the dropdown is open
    pub fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        let dropdown = self.dropdown.lock().ok()?;
        if !dropdown.visible || self.suggestions.is_empty() {
            return None;
        }
        let area = dropdown.region;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        // Input box is 3 rows, dropdown border 1 row, then one row per suggestion
        let first_row = area.y + 4;
        let index = row.checked_sub(first_row)? as usize;
        (index < self.suggestions.len()).then_some(index)
    }

    fn set_visible(&mut self, visible: bool) {
        if let Ok(mut dropdown) = self.dropdown.lock() {
            dropdown.visible = visible;
        }
    }

    fn move_highlight(&mut self, down: bool) {
        if self.suggestions.is_empty() {
            self.highlighted = None;
            return;
        }
        let last = self.suggestions.len() - 1;
        self.highlighted = Some(match (self.highlighted, down) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        });
    }

    /// Render the input, and the dropdown below it when open
    pub fn render(&mut self, f: &mut Frame, area: Rect, search: &str, ctx: &RenderContext) {
        let theme = ctx.theme;

        let input = if search.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)))
        } else {
            Line::from(Span::styled(search.to_string(), Style::default().fg(theme.fg)))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(ctx.focused))
            .title(" 🔍 Search ");
        f.render_widget(Paragraph::new(input).block(block), area);

        if ctx.focused {
            let cursor_x = area.x + 1 + unicode_width::UnicodeWidthStr::width(search) as u16;
            f.set_cursor_position(Position::new(
                cursor_x.min(area.right().saturating_sub(2)),
                area.y + 1,
            ));
        }

        let visible = !self.visible_suggestions().is_empty();
        if !visible {
            self.set_region(area);
            return;
        }

        // Dropdown overlays whatever is below the input
        let height = (self.suggestions.len() as u16 + 2).min(f.area().bottom().saturating_sub(area.bottom()));
        let dropdown_area = Rect::new(area.x, area.bottom(), area.width, height);
        self.set_region(area.union(dropdown_area));

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|s| {
                let mut spans = vec![Span::styled(
                    s.name.clone(),
                    Style::default().fg(theme.doctor_name).add_modifier(Modifier::BOLD),
                )];
                if !s.specialty.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", s.specialty),
                        Style::default().fg(theme.specialty),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style(true)),
            )
            .highlight_style(theme.selection_style());

        let mut state = ListState::default().with_selected(self.highlighted);
        f.render_widget(Clear, dropdown_area);
        f.render_stateful_widget(list, dropdown_area, &mut state);
    }
}

impl Interactive for SearchBar {
    fn handle_key(&mut self, key: KeyEvent, view: &mut ViewState) -> Handled {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut term = view.search.clone();
                term.push(c);
                view.set_search(term);
                self.focus();
                Handled::Yes
            }
            KeyCode::Backspace => {
                let mut term = view.search.clone();
                term.pop();
                view.set_search(term);
                self.focus();
                Handled::Yes
            }
            KeyCode::Down => {
                self.focus();
                self.move_highlight(true);
                Handled::Yes
            }
            KeyCode::Up => {
                self.move_highlight(false);
                Handled::Yes
            }
            KeyCode::Enter => {
                if let Some(idx) = self.highlighted.filter(|_| self.is_visible()) {
                    self.choose(idx, view);
                } else {
                    self.hide();
                }
                Handled::Yes
            }
            KeyCode::Esc if self.is_visible() => {
                self.hide();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        "type:search  ↑↓:suggestions  Enter:choose  Esc:close"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn doctors() -> Vec<DoctorRecord> {
        ["Dr. Asha Rao", "Dr. Arun Mehta", "Dr. Beena K"]
            .iter()
            .map(|name| DoctorRecord {
                name: name.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        let mut event = KeyEvent::new(code, KeyModifiers::NONE);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn test_focus_shows_and_outside_click_hides() {
        let bus = PointerBus::new();
        let mut bar = SearchBar::new();
        bar.mount(&bus);
        bar.set_region(Rect::new(0, 0, 40, 3));

        bar.focus();
        assert!(bar.is_visible());

        // Inside the bar: stays open
        bus.dispatch(PointerDown { column: 5, row: 1 });
        assert!(bar.is_visible());

        // Outside: closes
        bus.dispatch(PointerDown { column: 5, row: 10 });
        assert!(!bar.is_visible());
    }

    #[test]
    fn test_region_contains_only_while_open() {
        let mut bar = SearchBar::new();
        bar.set_region(Rect::new(0, 3, 40, 7));
        assert!(!bar.region_contains(5, 9));

        bar.focus();
        assert!(bar.region_contains(5, 9));
        assert!(!bar.region_contains(5, 10));
        assert!(!bar.region_contains(45, 4));
    }

    #[test]
    fn test_unmount_releases_listener() {
        let bus = PointerBus::new();
        let mut bar = SearchBar::new();
        bar.mount(&bus);
        assert_eq!(bus.listener_count(), 1);

        bar.unmount();
        assert_eq!(bus.listener_count(), 0);
        assert!(!bar.is_mounted());

        bar.focus();
        bus.dispatch(PointerDown { column: 99, row: 99 });
        assert!(bar.is_visible());
    }

    #[test]
    fn test_refresh_and_clear() {
        let mut bar = SearchBar::new();
        bar.refresh(&doctors(), "dr. a");
        assert_eq!(bar.suggestions().len(), 2);

        bar.refresh(&doctors(), "");
        assert!(bar.suggestions().is_empty());
    }

    #[test]
    fn test_choose_sets_full_name_and_hides() {
        let mut bar = SearchBar::new();
        let mut view = ViewState::default();
        view.set_search("aru");
        bar.focus();
        bar.refresh(&doctors(), &view.search);

        assert!(bar.choose(0, &mut view));
        assert_eq!(view.search, "Dr. Arun Mehta");
        assert!(!bar.is_visible());
    }

    #[test]
    fn test_choose_out_of_range_is_noop() {
        let mut bar = SearchBar::new();
        let mut view = ViewState::default();
        assert!(!bar.choose(3, &mut view));
        assert!(view.search.is_empty());
    }

    #[test]
    fn test_typing_edits_search() {
        let mut bar = SearchBar::new();
        let mut view = ViewState::default();

        bar.handle_key(key(KeyCode::Char('d')), &mut view);
        bar.handle_key(key(KeyCode::Char('r')), &mut view);
        assert_eq!(view.search, "dr");
        assert!(bar.is_visible());

        bar.handle_key(key(KeyCode::Backspace), &mut view);
        assert_eq!(view.search, "d");
    }

    #[test]
    fn test_arrow_and_enter_choose() {
        let mut bar = SearchBar::new();
        let mut view = ViewState::default();
        bar.handle_key(key(KeyCode::Char('B')), &mut view);
        bar.refresh(&doctors(), &view.search);

        bar.handle_key(key(KeyCode::Down), &mut view);
        assert_eq!(bar.highlighted(), Some(0));
        bar.handle_key(key(KeyCode::Enter), &mut view);
        assert_eq!(view.search, "Dr. Beena K");
        assert!(!bar.is_visible());
    }

    #[test]
    fn test_suggestion_hit_testing() {
        let mut bar = SearchBar::new();
        bar.refresh(&doctors(), "dr");
        bar.focus();
        bar.set_region(Rect::new(0, 0, 40, 8));

        assert_eq!(bar.suggestion_at(3, 4), Some(0));
        assert_eq!(bar.suggestion_at(3, 6), Some(2));
        assert_eq!(bar.suggestion_at(3, 1), None);

        bar.hide();
        assert_eq!(bar.suggestion_at(3, 4), None);
    }
}
