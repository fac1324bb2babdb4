//! Autocomplete suggestions for the search bar

use super::doctor::DoctorRecord;
use serde::Serialize;

/// Maximum number of suggestions shown under the search input
pub const SUGGESTION_LIMIT: usize = 5;

/// Projection of a record shown in the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    /// Primary specialty, or empty
    pub specialty: String,
    /// Photo URL, or empty
    pub image: String,
}

impl Suggestion {
    fn from_record(record: &DoctorRecord) -> Self {
        Self {
            name: record.name.clone(),
            specialty: record.primary_specialty().unwrap_or_default().to_string(),
            image: record.photo.clone().unwrap_or_default(),
        }
    }
}

/// First [`SUGGESTION_LIMIT`] records whose name contains `term`, in source order
pub fn suggestions(doctors: &[DoctorRecord], term: &str) -> Vec<Suggestion> {
    if term.is_empty() {
        return Vec::new();
    }

    let term_lower = term.to_lowercase();
    doctors
        .iter()
        .filter(|doctor| doctor.name_contains(&term_lower))
        .take(SUGGESTION_LIMIT)
        .map(Suggestion::from_record)
        .collect()
}
