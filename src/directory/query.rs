//! Location codec: view state <-> query string
//!
//! Keys: `search`, `consultationType`, `specialty` (repeated), `sortBy`.
//! Empty values are never written, so the default state encodes to "".
//! The location is replaced in place on every change; there is no history.

use super::state::{ConsultationMode, FilterState, SortKey, ViewState};
use url::form_urlencoded;

pub const KEY_SEARCH: &str = "search";
pub const KEY_CONSULTATION: &str = "consultationType";
pub const KEY_SPECIALTY: &str = "specialty";
pub const KEY_SORT: &str = "sortBy";

/// Serialize the full view state to a query string (without leading `?`)
pub fn encode(state: &ViewState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search.is_empty() {
        serializer.append_pair(KEY_SEARCH, &state.search);
    }
    if let Some(mode) = state.filters.consultation {
        serializer.append_pair(KEY_CONSULTATION, mode.as_str());
    }
    for specialty in &state.filters.specialties {
        serializer.append_pair(KEY_SPECIALTY, specialty);
    }
    if let Some(key) = state.filters.sort_by {
        serializer.append_pair(KEY_SORT, key.as_str());
    }

    serializer.finish()
}

/// Parse a query string into view state
///
/// Accepts `a=b`, `?a=b` or `/path?a=b`. Absent keys fall back to defaults;
/// unrecognised consultation/sort values are dropped.
pub fn decode(input: &str) -> ViewState {
    let query = split_query(input);

    let mut search: Option<String> = None;
    let mut consultation: Option<Option<ConsultationMode>> = None;
    let mut sort_by: Option<Option<SortKey>> = None;
    let mut specialties: Vec<String> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            KEY_SEARCH if search.is_none() => search = Some(value.into_owned()),
            KEY_CONSULTATION if consultation.is_none() => {
                let mode = ConsultationMode::from_label(&value);
                if mode.is_none() && !value.is_empty() {
                    tracing::debug!("Ignoring unknown consultationType {:?}", value);
                }
                consultation = Some(mode);
            }
            KEY_SORT if sort_by.is_none() => {
                let key = SortKey::from_label(&value);
                if key.is_none() && !value.is_empty() {
                    tracing::debug!("Ignoring unknown sortBy {:?}", value);
                }
                sort_by = Some(key);
            }
            KEY_SPECIALTY => {
                if !value.is_empty() && !specialties.iter().any(|s| *s == value) {
                    specialties.push(value.into_owned());
                }
            }
            _ => {}
        }
    }

    ViewState {
        search: search.unwrap_or_default(),
        filters: FilterState {
            consultation: consultation.flatten(),
            specialties,
            sort_by: sort_by.flatten(),
        },
    }
}

fn split_query(input: &str) -> &str {
    let without_fragment = input.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        // No `?`: a bare query, unless it looks like a plain path
        None if without_fragment.starts_with('/') => "",
        None => without_fragment,
    }
}

/// The shareable location of the current view
///
/// Stands in for the page URL: a fixed path plus the query that mirrors
/// the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: String::new(),
        }
    }

    /// Parse `path?query`; a bare query gets the default path `/`
    pub fn parse(input: &str) -> Self {
        let path = match input.split_once('?') {
            Some((path, _)) if !path.is_empty() => path.to_string(),
            None if input.starts_with('/') => input.split('#').next().unwrap_or("/").to_string(),
            _ => "/".to_string(),
        };
        Self {
            path,
            query: split_query(input).to_string(),
        }
    }

    /// View state encoded in this location
    pub fn view_state(&self) -> ViewState {
        decode(&self.query)
    }

    /// Re-project the view state into the current entry
    ///
    /// Returns `true` when the query string changed.
    pub fn replace_query(&mut self, state: &ViewState) -> bool {
        let query = encode(state);
        if query == self.query {
            return false;
        }
        tracing::debug!("Location replaced: {}?{}", self.path, query);
        self.query = query;
        true
    }

    #[cfg(test)]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[cfg(test)]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Full shareable form: `path` or `path?query`
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_state_encodes_to_empty_query() {
        assert_eq!(encode(&ViewState::default()), "");
        assert_eq!(decode(""), ViewState::default());
    }

    #[test]
    fn test_encode_key_order_and_repeated_specialty() {
        let state = ViewState {
            search: "Dr Rao".to_string(),
            filters: FilterState {
                consultation: Some(ConsultationMode::InClinic),
                specialties: vec!["Dentist".to_string(), "General Physician".to_string()],
                sort_by: Some(SortKey::Fees),
            },
        };
        assert_eq!(
            encode(&state),
            "search=Dr+Rao&consultationType=In+Clinic&specialty=Dentist&specialty=General+Physician&sortBy=fees"
        );
    }

    #[test]
    fn test_decode_accepts_path_and_question_mark() {
        let state = decode("/doctors?sortBy=experience&specialty=Dentist");
        assert_eq!(state.filters.sort_by, Some(SortKey::Experience));
        assert_eq!(state.filters.specialties, vec!["Dentist"]);

        let state = decode("?search=ana");
        assert_eq!(state.search, "ana");

        assert_eq!(decode("/doctors"), ViewState::default());
    }

    #[test]
    fn test_decode_ignores_unknown_values_and_keys() {
        let state = decode("consultationType=Home+Visit&sortBy=rating&page=2&search=%20x");
        assert_eq!(state.filters.consultation, None);
        assert_eq!(state.filters.sort_by, None);
        assert_eq!(state.search, " x");
    }

    #[test]
    fn test_decode_first_single_value_wins() {
        let state = decode("sortBy=fees&sortBy=experience&search=a&search=b");
        assert_eq!(state.filters.sort_by, Some(SortKey::Fees));
        assert_eq!(state.search, "a");
    }

    #[test]
    fn test_decode_drops_duplicate_specialties() {
        let state = decode("specialty=Dentist&specialty=Dentist&specialty=Ayurveda");
        assert_eq!(state.filters.specialties, vec!["Dentist", "Ayurveda"]);
    }

    #[test]
    fn test_location_replace_is_in_place() {
        let mut location = Location::parse("/doctors?search=old");
        assert_eq!(location.path(), "/doctors");
        assert_eq!(location.view_state().search, "old");

        let mut state = location.view_state();
        state.set_search("new");
        assert!(location.replace_query(&state));
        assert_eq!(location.href(), "/doctors?search=new");
        assert!(!location.replace_query(&state));

        state.set_search("");
        location.replace_query(&state);
        assert_eq!(location.href(), "/doctors");
    }

    #[test]
    fn test_location_parse_bare_query() {
        let location = Location::parse("sortBy=fees");
        assert_eq!(location.path(), "/");
        assert_eq!(location.query(), "sortBy=fees");
    }

    fn arb_state() -> impl Strategy<Value = ViewState> {
        (
            ".{0,12}",
            proptest::option::of(prop_oneof![
                Just(ConsultationMode::VideoConsult),
                Just(ConsultationMode::InClinic)
            ]),
            proptest::collection::vec("[A-Za-z &/+=?%-]{1,16}", 0..4),
            proptest::option::of(prop_oneof![Just(SortKey::Fees), Just(SortKey::Experience)]),
        )
            .prop_map(|(search, consultation, raw_specialties, sort_by)| {
                let mut state = ViewState::new(search, FilterState::default());
                state.filters.consultation = consultation;
                state.filters.sort_by = sort_by;
                for name in raw_specialties {
                    if !state.filters.is_specialty_selected(&name) {
                        state.toggle_specialty(&name);
                    }
                }
                state
            })
    }

    proptest! {
        #[test]
        fn prop_encode_decode_round_trip(state in arb_state()) {
            prop_assert_eq!(decode(&encode(&state)), state);
        }
    }
}
