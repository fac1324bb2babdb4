//! Doctor directory domain
//!
//! Everything here is pure data and functions over it: the record model,
//! the shared view state, the location codec and the derived views
//! (filtered list, suggestions, specialty options, display cards).
//! The terminal layer owns an instance of `ViewState` and calls into
//! these modules on every change.

pub mod card;
pub mod doctor;
pub mod engine;
pub mod query;
pub mod specialties;
pub mod state;
pub mod suggest;

pub use card::ListView;
pub use doctor::DoctorRecord;
pub use engine::filter_and_sort;
pub use query::Location;
pub use state::{ConsultationMode, SortKey, ViewState};
pub use suggest::{suggestions, Suggestion};

#[cfg(test)]
mod tests {
    //! End-to-end checks of the documented scenarios

    use super::*;
    use crate::directory::doctor::Specialty;
    use crate::directory::state::FilterState;

    fn scenario_doctors() -> Vec<DoctorRecord> {
        serde_json::from_value(serde_json::json!([
            {
                "name": "Dr. A",
                "fees": "₹500",
                "experience": "10",
                "consultationType": "Video Consult",
                "specialities": [{ "name": "Cardiologist" }]
            },
            {
                "name": "Dr. B",
                "fees": "₹300",
                "experience": "5",
                "consultationType": "In Clinic",
                "specialities": [{ "name": "Dermatologist" }]
            }
        ]))
        .unwrap()
    }

    fn names(list: &[&DoctorRecord]) -> Vec<String> {
        list.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn scenario_sort_by_fees() {
        let doctors = scenario_doctors();
        let state = query::decode("sortBy=fees");
        let result = filter_and_sort(&doctors, &state.search, &state.filters);
        assert_eq!(names(&result), vec!["Dr. B", "Dr. A"]);
    }

    #[test]
    fn scenario_video_consult_only() {
        let doctors = scenario_doctors();
        let mut state = ViewState::default();
        state.toggle_consultation(ConsultationMode::VideoConsult);
        let result = filter_and_sort(&doctors, &state.search, &state.filters);
        assert_eq!(names(&result), vec!["Dr. A"]);
    }

    #[test]
    fn scenario_search_dr_keeps_source_order() {
        let doctors = scenario_doctors();
        let state = ViewState::new("dr", FilterState::default());
        let result = filter_and_sort(&doctors, &state.search, &state.filters);
        assert_eq!(names(&result), vec!["Dr. A", "Dr. B"]);
    }

    #[test]
    fn scenario_state_survives_location_round_trip() {
        let mut location = Location::parse("/?search=dr&specialty=Cardiologist");
        let mut state = location.view_state();
        state.toggle_sort(SortKey::Experience);
        location.replace_query(&state);

        let restored = Location::parse(&location.href()).view_state();
        assert_eq!(restored, state);
        assert_eq!(restored.filters.specialties, vec!["Cardiologist"]);
        assert!(scenario_doctors()[0].specialities.contains(&Specialty {
            name: "Cardiologist".to_string()
        }));
    }
}
