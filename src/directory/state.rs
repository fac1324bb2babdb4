//! View state: the search term plus the filter selections
//!
//! `ViewState` is the one source of truth shared by the search bar, the
//! filter panel and the location codec. It is only mutated through the
//! setters below; each returns `true` when something actually changed so
//! the caller knows whether to re-project the location.

use serde::Serialize;

/// Consultation mode filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConsultationMode {
    VideoConsult,
    InClinic,
}

impl ConsultationMode {
    pub const ALL: [ConsultationMode; 2] = [ConsultationMode::VideoConsult, ConsultationMode::InClinic];

    /// Wire label, as found in records and in the query string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideoConsult => "Video Consult",
            Self::InClinic => "In Clinic",
        }
    }

    /// Parse a wire label (exact match)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == label)
    }

    /// Label shown next to the radio button
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::VideoConsult => "Video Consultation",
            Self::InClinic => "In-clinic Consultation",
        }
    }
}

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortKey {
    /// Ascending fee
    Fees,
    /// Descending experience
    Experience,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Fees, SortKey::Experience];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fees => "fees",
            Self::Experience => "experience",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == label)
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Fees => "Price: Low-High",
            Self::Experience => "Experience - Most Experience first",
        }
    }
}

/// Filter selections. `None` means unset ("All" / no sort).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub consultation: Option<ConsultationMode>,
    /// Selected specialty names in order of selection, no duplicates
    pub specialties: Vec<String>,
    pub sort_by: Option<SortKey>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.consultation.is_none() && self.specialties.is_empty() && self.sort_by.is_none()
    }

    pub fn is_specialty_selected(&self, name: &str) -> bool {
        self.specialties.iter().any(|s| s == name)
    }
}

/// Search term plus filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Empty string means "no search filter"
    pub search: String,
    pub filters: FilterState,
}

impl ViewState {
    #[cfg(test)]
    pub fn new(search: impl Into<String>, filters: FilterState) -> Self {
        Self {
            search: search.into(),
            filters,
        }
    }

    /// Overwrite the search term (typing, or choosing a suggestion)
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.search == term {
            return false;
        }
        self.search = term;
        true
    }

    /// Select a consultation mode; selecting the active one clears it
    pub fn toggle_consultation(&mut self, mode: ConsultationMode) -> bool {
        self.filters.consultation = if self.filters.consultation == Some(mode) {
            None
        } else {
            Some(mode)
        };
        true
    }

    /// The explicit "All" option
    pub fn show_all_consultations(&mut self) -> bool {
        self.filters.consultation.take().is_some()
    }

    /// Select a sort key; selecting the active one turns sorting off
    pub fn toggle_sort(&mut self, key: SortKey) -> bool {
        self.filters.sort_by = if self.filters.sort_by == Some(key) {
            None
        } else {
            Some(key)
        };
        true
    }

    /// Add the specialty if absent, remove it if present
    pub fn toggle_specialty(&mut self, name: &str) -> bool {
        let specialties = &mut self.filters.specialties;
        match specialties.iter().position(|s| s == name) {
            Some(idx) => {
                specialties.remove(idx);
            }
            None => specialties.push(name.to_string()),
        }
        true
    }

    /// "Clear All": reset every filter, keep the search term
    pub fn clear_filters(&mut self) -> bool {
        if self.filters.is_empty() {
            return false;
        }
        self.filters = FilterState::default();
        true
    }
}
