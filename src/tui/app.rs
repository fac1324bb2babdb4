// TUI application state
//
// The App owns the one `ViewState`, the `Location` that mirrors it, the
// loaded directory and the panels. Panels change the view state; every
// change funnels through `commit`, which re-projects the state into the
// location (replacing, never appending) and refreshes derived values.

use super::clipboard;
use super::components::{DoctorList, FilterPanel, SearchBar, Toast};
use super::pointer::{PointerBus, PointerDown};
use super::theme::{Theme, ThemeKind};
use super::traits::{Handled, Interactive};
use crate::config::Config;
use crate::directory::{filter_and_sort, DoctorRecord, ListView, Location, ViewState};
use crate::logging::LogBuffer;
use crate::snapshot::RenderSnapshot;
use crate::source::SourceState;
use crossterm::event::KeyEvent;
use ratatui::layout::{Position, Rect};

/// Panels that can be focused for input routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    Filters,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Filters,
            Focus::Filters => Focus::List,
            Focus::List => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::List,
            Focus::Filters => Focus::Search,
            Focus::List => Focus::Filters,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    pub theme: Theme,
    pub source: SourceState,
    /// Bumped whenever the directory is replaced
    directory_generation: u64,

    pub view: ViewState,
    pub location: Location,

    pub search_bar: SearchBar,
    pub filter_panel: FilterPanel,
    pub doctor_list: DoctorList,
    pub focus: Focus,

    pub pointer: PointerBus,
    pub log_buffer: LogBuffer,
    pub toast: Option<Toast>,
    pub should_quit: bool,

    /// Where the search input was last drawn
    pub search_area: Rect,
    animation_frame: usize,
}

impl App {
    /// Build the app with the view state encoded in the initial location
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let mut location = Location::parse(&config.initial_view);
        let view = location.view_state();
        // Canonical form: drop unknown keys and values
        location.replace_query(&view);

        let pointer = PointerBus::new();
        let mut search_bar = SearchBar::new();
        search_bar.mount(&pointer);

        let mut app = Self {
            theme: ThemeKind::from_name(&config.theme).theme(),
            source: SourceState::Loading,
            directory_generation: 0,
            view,
            location,
            search_bar,
            filter_panel: FilterPanel::new(),
            doctor_list: DoctorList::new(),
            focus: Focus::default(),
            pointer,
            log_buffer,
            toast: None,
            should_quit: false,
            search_area: Rect::default(),
            animation_frame: 0,
        };
        app.set_focus(Focus::Search);
        app
    }

    /// The directory load finished (or failed)
    pub fn set_source(&mut self, source: SourceState) {
        self.source = source;
        self.directory_generation += 1;

        self.filter_panel
            .sync_universe(self.source.doctors(), self.directory_generation);
        self.search_bar
            .refresh(self.source.doctors(), &self.view.search);
        self.doctor_list.reset();
    }

    /// Re-project the view state after a change
    pub fn commit(&mut self) {
        self.location.replace_query(&self.view);
        self.search_bar
            .refresh(self.source.doctors(), &self.view.search);
        self.doctor_list.reset();
    }

    /// Filtered and sorted doctors for the current view state
    pub fn filtered(&self) -> Vec<&DoctorRecord> {
        filter_and_sort(self.source.doctors(), &self.view.search, &self.view.filters)
    }

    pub fn list_view(&self) -> ListView {
        let failure = self.source.failure().map(|e| e.to_string());
        ListView::build(self.source.is_loading(), failure.as_deref(), &self.filtered())
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(
            &self.location,
            &self.view,
            self.search_bar.suggestions(),
            self.search_bar.is_visible(),
            &self.list_view(),
        )
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Search {
            self.search_bar.focus();
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Whether printable keys go into a text field
    pub fn is_typing(&self) -> bool {
        match self.focus {
            Focus::Search => true,
            Focus::Filters => self.filter_panel.on_query_row(),
            Focus::List => false,
        }
    }

    pub fn focus_hint(&self) -> &'static str {
        match self.focus {
            Focus::Search => self.search_bar.focus_hint(),
            Focus::Filters => self.filter_panel.focus_hint(),
            Focus::List => self.doctor_list.focus_hint(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Route a key to the focused panel, committing any view-state change
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        let before = self.view.clone();
        let handled = match self.focus {
            Focus::Search => self.search_bar.handle_key(key, &mut self.view),
            Focus::Filters => self.filter_panel.handle_key(key, &mut self.view),
            Focus::List => self.doctor_list.handle_key(key, &mut self.view),
        };
        if self.view != before {
            self.commit();
        }
        handled
    }

    /// Left button pressed at a cell
    ///
    /// The press is broadcast first (outside-click listeners), then used
    /// to focus and activate whatever was clicked.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        self.pointer.dispatch(PointerDown { column, row });
        let at = Position::new(column, row);

        if let Some(index) = self.search_bar.suggestion_at(column, row) {
            self.focus = Focus::Search;
            if self.search_bar.choose(index, &mut self.view) {
                self.commit();
            }
            return;
        }

        // The open dropdown covers the panels below it
        if self.search_bar.region_contains(column, row) {
            self.set_focus(Focus::Search);
            return;
        }

        if self.search_area.contains(at) {
            self.set_focus(Focus::Search);
        } else if self.filter_panel.area().contains(at) {
            self.focus = Focus::Filters;
            if let Some(row) = self.filter_panel.row_at(column, row) {
                if self.filter_panel.activate(&row, &mut self.view) {
                    self.commit();
                }
            }
        } else if self.doctor_list.area().contains(at) {
            self.focus = Focus::List;
            self.doctor_list.click(row);
        }
    }

    /// Copy the share link to the clipboard
    pub fn copy_link(&mut self) {
        match clipboard::copy_share_link(&self.location) {
            Ok(href) => {
                tracing::info!("Copied share link {}", href);
                self.show_toast("✓ Link copied");
            }
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ticks and toasts
    // ─────────────────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn animation_frame(&self) -> usize {
        self.animation_frame
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }
}
