//! Headless render snapshot
//!
//! A serializable picture of what the browser shows, keyed by stable hook
//! names so scripts and tests can find the search input, the suggestion
//! rows and the doctor cards without scraping terminal cells.

use crate::directory::{ListView, Location, Suggestion, ViewState};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    /// Shareable `path?query`
    pub location: String,
    /// Current contents of the search input
    #[serde(rename = "autocomplete-input")]
    pub autocomplete_input: String,
    /// Whether the suggestion dropdown is open
    pub dropdown_visible: bool,
    #[serde(rename = "suggestion-item")]
    pub suggestion_items: Vec<Suggestion>,
    /// `loading`, `failed`, `empty` or `populated`
    pub state: &'static str,
    /// Placeholder or error text when not populated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "doctor-card")]
    pub doctor_cards: Vec<CardSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    pub id: String,
    #[serde(rename = "doctor-name")]
    pub doctor_name: String,
    pub specialty: String,
    pub description: String,
    pub experience: String,
    pub clinic: String,
    pub fee: String,
}

impl RenderSnapshot {
    pub fn capture(
        location: &Location,
        view: &ViewState,
        suggestions: &[Suggestion],
        dropdown_visible: bool,
        list: &ListView,
    ) -> Self {
        use crate::directory::card::{EMPTY_TEXT, LOADING_TEXT};

        let message = match list {
            ListView::Loading => Some(LOADING_TEXT.to_string()),
            ListView::Failed(error) => Some(format!("Could not load doctors: {}", error)),
            ListView::Empty => Some(EMPTY_TEXT.to_string()),
            ListView::Populated(_) => None,
        };

        let doctor_cards = list
            .cards()
            .iter()
            .map(|card| CardSnapshot {
                id: card.id.clone(),
                doctor_name: card.name.clone(),
                specialty: card.specialty.clone(),
                description: card.description.clone(),
                experience: card.experience.clone(),
                clinic: card.clinic.clone(),
                fee: card.fee.clone(),
            })
            .collect();

        Self {
            location: location.href(),
            autocomplete_input: view.search.clone(),
            dropdown_visible,
            suggestion_items: suggestions.to_vec(),
            state: list.state_name(),
            message,
            doctor_cards,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{suggestions, DoctorRecord};

    #[test]
    fn test_hook_names_in_json() {
        let doctors = vec![DoctorRecord {
            name: "Dr. Hook".to_string(),
            ..Default::default()
        }];
        let refs: Vec<&DoctorRecord> = doctors.iter().collect();
        let location = Location::parse("/?search=hook");
        let view = location.view_state();
        let list = ListView::build(false, None, &refs);

        let snapshot = RenderSnapshot::capture(
            &location,
            &view,
            &suggestions(&doctors, &view.search),
            true,
            &list,
        );
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(json["location"], "/?search=hook");
        assert_eq!(json["autocomplete-input"], "hook");
        assert_eq!(json["suggestion-item"][0]["name"], "Dr. Hook");
        assert_eq!(json["state"], "populated");
        assert_eq!(json["doctor-card"][0]["doctor-name"], "Dr. Hook");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_empty_state_message() {
        let location = Location::default();
        let snapshot = RenderSnapshot::capture(
            &location,
            &ViewState::default(),
            &[],
            false,
            &ListView::Empty,
        );
        assert_eq!(snapshot.state, "empty");
        assert_eq!(
            snapshot.message.as_deref(),
            Some("No doctors found matching your criteria.")
        );
        assert!(snapshot.doctor_cards.is_empty());
    }
}
