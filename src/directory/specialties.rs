//! Specialty options for the filter panel

use super::doctor::DoctorRecord;
use std::collections::BTreeSet;

/// Sorted, deduplicated union of every specialty name in the directory
pub fn specialty_universe(doctors: &[DoctorRecord]) -> Vec<String> {
    doctors
        .iter()
        .flat_map(|doctor| doctor.specialities.iter().map(|s| s.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Options whose name contains `query` (case-insensitive); empty query keeps all
pub fn filter_options<'a>(universe: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.to_lowercase();
    universe
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}
