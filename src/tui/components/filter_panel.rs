//! Filter sidebar: sort, specialities, consultation mode
//!
//! The panel is a flat list of rows walked by a cursor. Activating a row
//! applies the toggle semantics of its group to the shared `ViewState`.
//! The specialty options come from the whole directory and are rebuilt
//! only when the directory itself changes (tracked by a generation number);
//! the local text filter narrows what is shown without touching the state.

use crate::directory::specialties::{filter_options, specialty_universe};
use crate::directory::{ConsultationMode, DoctorRecord, SortKey, ViewState};
use crate::tui::traits::{Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One selectable row of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    ClearAll,
    Sort(SortKey),
    /// The local specialty text filter
    SpecialtyQuery,
    Specialty(String),
    /// `None` is the explicit "All" option
    Consultation(Option<ConsultationMode>),
}

#[derive(Debug, Default)]
pub struct FilterPanel {
    universe: Vec<String>,
    universe_generation: Option<u64>,
    specialty_query: String,
    cursor: usize,
    /// Geometry of the last render, for mouse hit-testing
    area: Rect,
    /// List item index of each row (headings take items too)
    row_items: Vec<usize>,
    /// First list item scrolled into view
    item_offset: usize,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the specialty options if the directory changed since last time
    pub fn sync_universe(&mut self, doctors: &[DoctorRecord], generation: u64) {
        if self.universe_generation == Some(generation) {
            return;
        }
        self.universe = specialty_universe(doctors);
        self.universe_generation = Some(generation);
        tracing::debug!("Specialty options rebuilt: {}", self.universe.len());
        self.clamp_cursor();
    }

    #[cfg(test)]
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    #[cfg(test)]
    pub fn specialty_query(&self) -> &str {
        &self.specialty_query
    }

    /// Specialty options after the local text filter
    pub fn visible_specialties(&self) -> Vec<&str> {
        filter_options(&self.universe, &self.specialty_query)
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> Vec<FilterRow> {
        let mut rows = vec![FilterRow::ClearAll];
        rows.extend(SortKey::ALL.iter().map(|k| FilterRow::Sort(*k)));
        rows.push(FilterRow::SpecialtyQuery);
        rows.extend(
            self.visible_specialties()
                .into_iter()
                .map(|s| FilterRow::Specialty(s.to_string())),
        );
        rows.push(FilterRow::Consultation(None));
        rows.extend(
            ConsultationMode::ALL
                .iter()
                .map(|m| FilterRow::Consultation(Some(*m))),
        );
        rows
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_row(&self) -> Option<FilterRow> {
        self.rows().into_iter().nth(self.cursor)
    }

    /// Whether the cursor sits on the specialty text field
    pub fn on_query_row(&self) -> bool {
        self.current_row() == Some(FilterRow::SpecialtyQuery)
    }

    /// Apply a row's toggle to the view state
    pub fn activate(&mut self, row: &FilterRow, view: &mut ViewState) -> bool {
        match row {
            FilterRow::ClearAll => self.clear_all(view),
            FilterRow::Sort(key) => view.toggle_sort(*key),
            FilterRow::SpecialtyQuery => false,
            FilterRow::Specialty(name) => view.toggle_specialty(name),
            FilterRow::Consultation(None) => view.show_all_consultations(),
            FilterRow::Consultation(Some(mode)) => view.toggle_consultation(*mode),
        }
    }

    /// Reset every filter; the search term and the local text filter stay
    pub fn clear_all(&mut self, view: &mut ViewState) -> bool {
        view.clear_filters()
    }

    /// Move the cursor onto the row under a screen cell; returns that row
    pub fn row_at(&mut self, column: u16, row: u16) -> Option<FilterRow> {
        let inner_top = self.area.y + 1;
        let inner_bottom = self.area.bottom().saturating_sub(1);
        if column <= self.area.x
            || column >= self.area.right().saturating_sub(1)
            || row < inner_top
            || row >= inner_bottom
        {
            return None;
        }
        let item = self.item_offset + (row - inner_top) as usize;
        let index = self.row_items.iter().position(|&i| i == item)?;
        let found = self.rows().into_iter().nth(index)?;
        self.cursor = index;
        Some(found)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn clamp_cursor(&mut self) {
        let count = self.rows().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.specialty_query);
        self.clamp_cursor();
    }

    fn row_is_checked(row: &FilterRow, view: &ViewState) -> bool {
        let filters = &view.filters;
        match row {
            FilterRow::Sort(key) => filters.sort_by == Some(*key),
            FilterRow::Specialty(name) => filters.is_specialty_selected(name),
            FilterRow::Consultation(mode) => filters.consultation == *mode,
            FilterRow::ClearAll | FilterRow::SpecialtyQuery => false,
        }
    }

    fn row_line(&self, row: &FilterRow, view: &ViewState, ctx: &RenderContext) -> Line<'static> {
        let theme = ctx.theme;
        let checked = Self::row_is_checked(row, view);
        let marker_style = Style::default().fg(theme.checked);
        let radio = if checked { "(•) " } else { "( ) " };
        let check = if checked { "[x] " } else { "[ ] " };

        match row {
            FilterRow::ClearAll => Line::from(Span::styled(
                "Clear All",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )),
            FilterRow::Sort(key) => Line::from(vec![
                Span::styled(radio, marker_style),
                Span::raw(key.display_label()),
            ]),
            FilterRow::SpecialtyQuery => {
                let text = if self.specialty_query.is_empty() {
                    Span::styled("Search specialities…", Style::default().fg(theme.muted))
                } else {
                    Span::raw(self.specialty_query.clone())
                };
                Line::from(vec![Span::styled("🔍 ", marker_style), text])
            }
            FilterRow::Specialty(name) => Line::from(vec![
                Span::styled(check, marker_style),
                Span::raw(name.clone()),
            ]),
            FilterRow::Consultation(mode) => Line::from(vec![
                Span::styled(radio, marker_style),
                Span::raw(mode.map(|m| m.display_label()).unwrap_or("All")),
            ]),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, view: &ViewState, ctx: &RenderContext) {
        self.area = area;
        let theme = ctx.theme;
        let rows = self.rows();

        // Section headings are interleaved; keep a map back to row indexes
        let mut items: Vec<ListItem> = Vec::with_capacity(rows.len() + 3);
        let mut item_for_row = Vec::with_capacity(rows.len());
        let heading = |text: &'static str| {
            ListItem::new(Line::from(Span::styled(
                text,
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            )))
        };

        for row in &rows {
            match row {
                FilterRow::Sort(SortKey::Fees) => items.push(heading("Sort by")),
                FilterRow::SpecialtyQuery => items.push(heading("Specialities")),
                FilterRow::Consultation(None) => items.push(heading("Mode of consultation")),
                _ => {}
            }
            item_for_row.push(items.len());
            items.push(ListItem::new(self.row_line(row, view, ctx)));
        }

        let title = if ctx.focused {
            " Filters (c: clear) "
        } else {
            " Filters "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(ctx.focused))
            .title(title);

        let selected = item_for_row.get(self.cursor).copied();
        let mut state = ListState::default().with_selected(selected.filter(|_| ctx.focused));
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selection_style());
        f.render_stateful_widget(list, area, &mut state);

        self.row_items = item_for_row;
        self.item_offset = state.offset();
    }
}

impl Interactive for FilterPanel {
    fn handle_key(&mut self, key: KeyEvent, view: &mut ViewState) -> Handled {
        let rows = self.rows();

        // The text field swallows printable input while the cursor is on it
        if self.on_query_row() {
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.edit_query(|q| q.push(c));
                    return Handled::Yes;
                }
                KeyCode::Backspace => {
                    self.edit_query(|q| {
                        q.pop();
                    });
                    return Handled::Yes;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < rows.len() {
                    self.cursor += 1;
                }
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = rows.len().saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = rows.get(self.cursor) {
                    self.activate(row, view);
                }
                Handled::Yes
            }
            KeyCode::Char('c') => {
                self.clear_all(view);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓:move  Space/Enter:toggle  c:clear all"
    }
}
