//! Filter/sort pipeline over the loaded directory
//!
//! Pure and deterministic: takes borrowed records and returns the surviving
//! records in display order. Recomputed from scratch on every state change;
//! the directory is small enough that nothing is cached.

use super::doctor::DoctorRecord;
use super::state::{FilterState, SortKey};
use std::cmp::Ordering;

/// Whether a record passes the search term and every filter
///
/// `search_lower` must already be lowercased (empty = no search filter).
pub fn matches(record: &DoctorRecord, search_lower: &str, filters: &FilterState) -> bool {
    let matches_search = record.name_contains(search_lower);

    let matches_consultation = match filters.consultation {
        None => true,
        Some(mode) => record.consultation_type.as_deref() == Some(mode.as_str()),
    };

    let matches_specialties = filters.specialties.is_empty()
        || filters
            .specialties
            .iter()
            .any(|name| record.has_specialty(name));

    matches_search && matches_consultation && matches_specialties
}

/// Filter the directory and order the result
///
/// Sorting is stable, so ties keep their source order and `sort_by == None`
/// leaves the filtered order untouched.
pub fn filter_and_sort<'a>(
    doctors: &'a [DoctorRecord],
    search: &str,
    filters: &FilterState,
) -> Vec<&'a DoctorRecord> {
    let search_lower = search.to_lowercase();

    let mut result: Vec<&DoctorRecord> = doctors
        .iter()
        .filter(|doctor| matches(doctor, &search_lower, filters))
        .collect();

    if let Some(key) = filters.sort_by {
        result.sort_by(|a, b| compare(key, a, b));
    }

    result
}

fn compare(key: SortKey, a: &DoctorRecord, b: &DoctorRecord) -> Ordering {
    match key {
        SortKey::Fees => a.fee_value().total_cmp(&b.fee_value()),
        SortKey::Experience => b.experience_value().total_cmp(&a.experience_value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::doctor::{DoctorId, Specialty};
    use crate::directory::state::ConsultationMode;
    use proptest::prelude::*;

    fn doctor(name: &str, fees: &str, experience: &str, mode: &str, specialty: &str) -> DoctorRecord {
        DoctorRecord {
            id: DoctorId::Text(name.to_string()),
            name: name.to_string(),
            specialities: vec![Specialty {
                name: specialty.to_string(),
            }],
            consultation_type: Some(mode.to_string()),
            experience: Some(experience.to_string()),
            fees: Some(fees.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<DoctorRecord> {
        vec![
            doctor("Dr. A", "₹500", "10", "Video Consult", "Cardiologist"),
            doctor("Dr. B", "₹300", "5", "In Clinic", "Dermatologist"),
        ]
    }

    fn names(list: &[&DoctorRecord]) -> Vec<String> {
        list.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_sort_by_fees_ascending() {
        let doctors = sample();
        let filters = FilterState {
            sort_by: Some(SortKey::Fees),
            ..Default::default()
        };
        let result = filter_and_sort(&doctors, "", &filters);
        assert_eq!(names(&result), vec!["Dr. B", "Dr. A"]);
    }

    #[test]
    fn test_sort_by_experience_descending() {
        let mut doctors = sample();
        doctors.reverse();
        let filters = FilterState {
            sort_by: Some(SortKey::Experience),
            ..Default::default()
        };
        let result = filter_and_sort(&doctors, "", &filters);
        assert_eq!(names(&result), vec!["Dr. A", "Dr. B"]);
    }

    #[test]
    fn test_consultation_filter_is_exact() {
        let doctors = sample();
        let filters = FilterState {
            consultation: Some(ConsultationMode::VideoConsult),
            ..Default::default()
        };
        let result = filter_and_sort(&doctors, "", &filters);
        assert_eq!(names(&result), vec!["Dr. A"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_preserves_order() {
        let doctors = sample();
        let result = filter_and_sort(&doctors, "dr", &FilterState::default());
        assert_eq!(names(&result), vec!["Dr. A", "Dr. B"]);

        let result = filter_and_sort(&doctors, "DR. b", &FilterState::default());
        assert_eq!(names(&result), vec!["Dr. B"]);
    }

    #[test]
    fn test_specialty_filter_matches_any_selected() {
        let doctors = sample();
        let filters = FilterState {
            specialties: vec!["Dermatologist".to_string(), "Unknown".to_string()],
            ..Default::default()
        };
        let result = filter_and_sort(&doctors, "", &filters);
        assert_eq!(names(&result), vec!["Dr. B"]);
    }

    #[test]
    fn test_record_without_specialities_never_matches_specialty_filter() {
        let mut doctors = sample();
        doctors.push(DoctorRecord {
            name: "Dr. C".to_string(),
            ..Default::default()
        });

        let all = filter_and_sort(&doctors, "", &FilterState::default());
        assert_eq!(all.len(), 3);

        let filters = FilterState {
            specialties: vec!["Cardiologist".to_string()],
            ..Default::default()
        };
        let result = filter_and_sort(&doctors, "", &filters);
        assert_eq!(names(&result), vec!["Dr. A"]);
    }

    #[test]
    fn test_missing_fees_sort_as_zero_and_ties_are_stable() {
        let doctors = vec![
            doctor("Dr. P", "₹200", "1", "In Clinic", "Dentist"),
            DoctorRecord {
                name: "Dr. Q".to_string(),
                ..Default::default()
            },
            doctor("Dr. R", "₹200", "1", "In Clinic", "Dentist"),
            DoctorRecord {
                name: "Dr. S".to_string(),
                fees: Some("call us".to_string()),
                ..Default::default()
            },
        ];
        let filters = FilterState {
            sort_by: Some(SortKey::Fees),
            ..Default::default()
        };
        let result = filter_and_sort(&doctors, "", &filters);
        assert_eq!(names(&result), vec!["Dr. Q", "Dr. S", "Dr. P", "Dr. R"]);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────

    const NAMES: [&str; 4] = ["Dr. Asha", "dr. bala", "Dr. Chen", "Mr. Dev"];
    const MODES: [&str; 3] = ["Video Consult", "In Clinic", "Home Visit"];
    const SPECIALTIES: [&str; 3] = ["Dentist", "Cardiologist", "Ayurveda"];

    fn arb_doctor() -> impl Strategy<Value = DoctorRecord> {
        (
            0..NAMES.len(),
            proptest::option::of(0..MODES.len()),
            proptest::collection::vec(0..SPECIALTIES.len(), 0..3),
            proptest::option::of(0u32..2000),
            proptest::option::of(0u32..40),
        )
            .prop_map(|(name, mode, specs, fee, exp)| DoctorRecord {
                name: NAMES[name].to_string(),
                consultation_type: mode.map(|m| MODES[m].to_string()),
                specialities: specs
                    .into_iter()
                    .map(|s| Specialty {
                        name: SPECIALTIES[s].to_string(),
                    })
                    .collect(),
                fees: fee.map(|f| format!("₹ {}", f)),
                experience: exp.map(|e| format!("{} Years of experience", e)),
                ..Default::default()
            })
    }

    fn arb_filters() -> impl Strategy<Value = FilterState> {
        (
            proptest::option::of(prop_oneof![
                Just(ConsultationMode::VideoConsult),
                Just(ConsultationMode::InClinic)
            ]),
            proptest::sample::subsequence(SPECIALTIES.to_vec(), 0..=SPECIALTIES.len()),
            proptest::option::of(prop_oneof![Just(SortKey::Fees), Just(SortKey::Experience)]),
        )
            .prop_map(|(consultation, specs, sort_by)| FilterState {
                consultation,
                specialties: specs.into_iter().map(str::to_string).collect(),
                sort_by,
            })
    }

    proptest! {
        #[test]
        fn prop_output_is_exactly_the_matching_records(
            doctors in proptest::collection::vec(arb_doctor(), 0..12),
            search in prop_oneof![Just(String::new()), Just("dr".to_string()), Just("CHEN".to_string()), Just("x".to_string())],
            filters in arb_filters(),
        ) {
            let result = filter_and_sort(&doctors, &search, &filters);
            let lower = search.to_lowercase();

            for doctor in &result {
                prop_assert!(matches(doctor, &lower, &filters));
            }
            let expected = doctors.iter().filter(|d| matches(d, &lower, &filters)).count();
            prop_assert_eq!(result.len(), expected);
        }

        #[test]
        fn prop_sort_order_holds(
            doctors in proptest::collection::vec(arb_doctor(), 0..12),
            filters in arb_filters(),
        ) {
            let result = filter_and_sort(&doctors, "", &filters);
            match filters.sort_by {
                Some(SortKey::Fees) => {
                    for pair in result.windows(2) {
                        prop_assert!(pair[0].fee_value() <= pair[1].fee_value());
                    }
                }
                Some(SortKey::Experience) => {
                    for pair in result.windows(2) {
                        prop_assert!(pair[0].experience_value() >= pair[1].experience_value());
                    }
                }
                None => {
                    // Same relative order as the source
                    let lower = String::new();
                    let expected: Vec<&DoctorRecord> = doctors
                        .iter()
                        .filter(|d| matches(d, &lower, &filters))
                        .collect();
                    prop_assert!(result.iter().zip(expected.iter()).all(|(a, b)| std::ptr::eq(*a, *b)));
                }
            }
        }
    }
}
