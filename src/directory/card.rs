//! Display projection of the doctor list
//!
//! Turns records into the strings a row shows, with fallbacks for missing
//! fields, and models the three mutually exclusive list states. Kept free
//! of any terminal types so the headless snapshot can share it.

use super::doctor::DoctorRecord;
use serde::Serialize;

/// Shown when a record has no specialty
pub const FALLBACK_SPECIALTY: &str = "General Physician";
/// Shown when a record has no clinic name
pub const FALLBACK_CLINIC: &str = "Clinic";
pub const CURRENCY: &str = "₹";

/// One rendered row of the doctor list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Introduction, or the specialty again
    pub description: String,
    pub experience: String,
    pub clinic: String,
    pub fee: String,
    pub has_photo: bool,
}

impl DoctorCard {
    pub fn from_record(record: &DoctorRecord) -> Self {
        let specialty = record
            .primary_specialty()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_SPECIALTY)
            .to_string();

        let description = record
            .doctor_introduction
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| specialty.clone());

        let clinic = record
            .clinic_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_CLINIC)
            .to_string();

        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            specialty,
            description,
            experience: format_experience(record.experience.as_deref()),
            clinic,
            fee: format_fee(record.fees.as_deref()),
            has_photo: record.photo.as_deref().is_some_and(|p| !p.is_empty()),
        }
    }
}

fn format_experience(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return "0 yrs exp.".to_string();
    }
    // Upstream often sends "13 Years of experience"; keep only the number
    let lower = raw.to_lowercase();
    if lower.contains("year") || lower.contains("yr") {
        let years = raw
            .split_whitespace()
            .next()
            .unwrap_or(raw);
        return format!("{} yrs exp.", years);
    }
    format!("{} yrs exp.", raw)
}

fn format_fee(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.starts_with(CURRENCY) {
        raw.to_string()
    } else {
        format!("{}{}", CURRENCY, raw)
    }
}

/// What the doctor list shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    /// The fetch failed; nothing to show
    Failed(String),
    /// Loaded, but nothing survived the filters (or the source was empty)
    Empty,
    Populated(Vec<DoctorCard>),
}

impl ListView {
    pub fn build(is_loading: bool, failure: Option<&str>, doctors: &[&DoctorRecord]) -> Self {
        if is_loading {
            return ListView::Loading;
        }
        if let Some(message) = failure {
            return ListView::Failed(message.to_string());
        }
        if doctors.is_empty() {
            return ListView::Empty;
        }
        ListView::Populated(doctors.iter().map(|d| DoctorCard::from_record(d)).collect())
    }

    /// Stable name of the state, used in snapshots
    pub fn state_name(&self) -> &'static str {
        match self {
            ListView::Loading => "loading",
            ListView::Failed(_) => "failed",
            ListView::Empty => "empty",
            ListView::Populated(_) => "populated",
        }
    }

    pub fn cards(&self) -> &[DoctorCard] {
        match self {
            ListView::Populated(cards) => cards,
            _ => &[],
        }
    }
}

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No doctors found matching your criteria.";
